//! Plan execution
//!
//! Walks a [`DistributionPlan`] in directory order, creating each destination
//! directory and moving its files out of the working directory. A missing or
//! unmovable file is reported and skipped; the batch always runs to the end.
//! Nothing is rolled back, so the progress log is the only record of a
//! partially completed run.

use crate::config::Config;
use crate::plan::{DirectoryAssignment, DistributionPlan};
use crate::Result;
use anyhow::Context;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveStatus {
    /// File moved into its destination directory
    Moved,
    /// Source file was not present in the working directory
    Missing,
    /// Move failed with the given error message
    Failed(String),
}

/// Per-file result
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// File index within the plan
    pub index: usize,
    /// Source path
    pub source: PathBuf,
    /// Destination path
    pub destination: PathBuf,
    /// Outcome
    pub status: MoveStatus,
}

/// Result of executing a plan
#[derive(Debug, Default, Clone)]
pub struct ExecutionReport {
    /// Directories that did not exist and were created
    pub created_dirs: Vec<PathBuf>,
    /// One outcome per planned file, in plan order
    pub outcomes: Vec<FileOutcome>,
}

impl ExecutionReport {
    /// Number of files moved
    pub fn moved_count(&self) -> usize {
        self.count(|s| matches!(s, MoveStatus::Moved))
    }

    /// Number of files skipped because they were missing
    pub fn missing_count(&self) -> usize {
        self.count(|s| matches!(s, MoveStatus::Missing))
    }

    /// Number of files whose move failed
    pub fn failed_count(&self) -> usize {
        self.count(|s| matches!(s, MoveStatus::Failed(_)))
    }

    /// One-line summary of the run
    pub fn summary(&self) -> String {
        format!(
            "Moved: {}, missing: {}, failed: {}",
            self.moved_count(),
            self.missing_count(),
            self.failed_count()
        )
    }

    fn count(&self, pred: impl Fn(&MoveStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| pred(&o.status)).count()
    }
}

/// Materializes a plan on the filesystem
pub struct Executor<'a> {
    config: &'a Config,
    plan: &'a DistributionPlan,
}

impl<'a> Executor<'a> {
    /// Create an executor for `plan` using the names and working directory in `config`
    pub fn new(config: &'a Config, plan: &'a DistributionPlan) -> Self {
        Self { config, plan }
    }

    /// Execute the plan, writing progress to stdout
    pub fn run_to_stdout(&self) -> Result<ExecutionReport> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run(&mut out)
    }

    /// Execute the plan, writing progress lines to `out`
    ///
    /// Only a failure to create a destination directory (or to write progress)
    /// is returned as an error; per-file problems end up in the report.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<ExecutionReport> {
        let plan = self.plan;
        let mut report = ExecutionReport::default();

        writeln!(out, "Total files: {}", plan.total_files)?;
        writeln!(out, "Directories: {}", plan.num_directories)?;
        writeln!(out, "Base files per directory: {}", plan.files_per_dir)?;
        writeln!(out, "Remaining files: {}", plan.remaining_files)?;
        writeln!(out)?;

        for assignment in plan.iter() {
            self.run_directory(assignment, out, &mut report)?;
        }

        writeln!(out, "Distribution complete!")?;
        debug!(
            moved = report.moved_count(),
            missing = report.missing_count(),
            failed = report.failed_count(),
            "execution finished"
        );

        Ok(report)
    }

    fn run_directory<W: Write>(
        &self,
        assignment: &DirectoryAssignment,
        out: &mut W,
        report: &mut ExecutionReport,
    ) -> Result<()> {
        let naming = &self.config.naming;
        let dir_name = naming.dir_name(assignment.dir_index);
        let dir_path = self.config.dir_path(assignment.dir_index);

        if ensure_dir(&dir_path)? {
            writeln!(out, "Created directory: {}", dir_name)?;
            report.created_dirs.push(dir_path.clone());
        }

        writeln!(out, "Directory {} will hold {} files:", dir_name, assignment.count())?;
        debug!(dir = %dir_path.display(), files = ?assignment.files, "processing directory");

        for index in assignment.files.clone() {
            let file_name = naming.file_name(index);
            let source = self.config.source_path(index);
            let destination = dir_path.join(&file_name);
            let shown = Path::new(&dir_name).join(&file_name);

            let status = if !source.exists() {
                writeln!(out, "  warning: file {} does not exist", file_name)?;
                MoveStatus::Missing
            } else {
                match move_file(&source, &destination) {
                    Ok(()) => {
                        writeln!(out, "  moved: {} -> {}", file_name, shown.display())?;
                        MoveStatus::Moved
                    }
                    Err(e) => {
                        writeln!(out, "  error: cannot move {}: {}", file_name, e)?;
                        MoveStatus::Failed(e.to_string())
                    }
                }
            };

            report.outcomes.push(FileOutcome {
                index,
                source,
                destination,
                status,
            });
        }

        writeln!(out)?;
        Ok(())
    }
}

/// Create `path` if it is not already a directory
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))?;
    Ok(true)
}

/// Move a file, falling back to copy + remove across filesystems
pub fn move_file(source: &Path, destination: &Path) -> io::Result<()> {
    match fs::rename(source, destination) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            debug!(source = %source.display(), "rename crosses filesystems, copying");
            fs::copy(source, destination)?;
            fs::remove_file(source)
        }
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn is_cross_device(err: &io::Error) -> bool {
    err.raw_os_error() == Some(libc::EXDEV)
}

#[cfg(not(unix))]
fn is_cross_device(_err: &io::Error) -> bool {
    false
}
