//! Human-readable plan preview

use crate::config::NamingConfig;
use crate::plan::{DirectoryAssignment, DistributionPlan};
use std::fmt::Write as _;

/// Print the plan preview to stdout
pub fn print_plan(plan: &DistributionPlan, naming: &NamingConfig) {
    print!("{}", render_plan(plan, naming));
}

/// Render the plan preview
///
/// ```text
/// === Distribution plan ===
/// Total files: 758
/// Directories: 7
///
/// dir_01: part000.txt ~ part108.txt (109 files)
/// ```
pub fn render_plan(plan: &DistributionPlan, naming: &NamingConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== Distribution plan ===");
    let _ = writeln!(out, "Total files: {}", plan.total_files);
    let _ = writeln!(out, "Directories: {}", plan.num_directories);
    let _ = writeln!(out);

    for assignment in plan.iter() {
        let _ = writeln!(out, "{}", format_assignment(assignment, naming));
    }

    let _ = writeln!(out);
    out
}

/// One preview line: `<dir>: <first> ~ <last> (<count> files)`
pub fn format_assignment(assignment: &DirectoryAssignment, naming: &NamingConfig) -> String {
    let dir_name = naming.dir_name(assignment.dir_index);

    match (assignment.first(), assignment.last()) {
        (Some(first), Some(last)) => format!(
            "{}: {} ~ {} ({} files)",
            dir_name,
            naming.file_name(first),
            naming.file_name(last),
            assignment.count()
        ),
        _ => format!("{}: - (0 files)", dir_name),
    }
}
