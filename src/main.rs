//! partdist CLI entry point

use anyhow::{Context, Result};
use partdist::archive::{self, SplitOptions};
use partdist::config::cli::{Cli, Command, PreviewFormat};
use partdist::config::{cli_convert, toml, validator, Config};
use partdist::gate::{self, Decision};
use partdist::output::{self, JsonPlan};
use partdist::{DistributionPlan, Executor};
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "partdist=debug" } else { "partdist=warn" };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    cli.validate()?;

    match &cli.command {
        Some(Command::Split { input, output_dir, prefix, suffix, cut_size }) => {
            let options = SplitOptions {
                prefix: prefix.clone(),
                suffix: suffix.clone(),
                cut_size: cli_convert::parse_cut_size(cut_size).context("Invalid cut size")?,
            };
            run_split(input, output_dir, &options)
        }
        Some(Command::Merge { input_dir, output }) => run_merge(input_dir, output),
        None => run_distribute(&cli),
    }
}

/// Preview the plan, then move files once the gate allows it
fn run_distribute(cli: &Cli) -> Result<()> {
    let config = toml::load_config(cli)?;
    validator::validate_config(&config).context("Configuration validation failed")?;
    debug!(?config, "resolved configuration");

    let plan = DistributionPlan::compute(
        config.distribution.total_files,
        config.distribution.num_directories,
    )?;

    println!("partdist v{}", env!("CARGO_PKG_VERSION"));
    println!("{}", "=".repeat(50));

    print_preview(&plan, &config, cli.format)?;

    match gate::decide(cli.execute, gate::prompt_confirmation) {
        Decision::Execute => {
            let report = Executor::new(&config, &plan).run_to_stdout()?;
            println!("{}", report.summary());
        }
        Decision::Abort => println!("{}", gate::ABORT_MESSAGE),
    }

    Ok(())
}

fn print_preview(plan: &DistributionPlan, config: &Config, format: PreviewFormat) -> Result<()> {
    match format {
        PreviewFormat::Text => output::print_plan(plan, &config.naming),
        PreviewFormat::Json => {
            println!("{}", JsonPlan::from_plan(plan, &config.naming).to_json_string()?);
        }
    }
    Ok(())
}

fn run_split(input: &Path, output_dir: &Path, options: &SplitOptions) -> Result<()> {
    println!("Splitting {}", input.display());
    println!("  Output directory: {}", output_dir.display());
    println!("  Prefix: {}", options.prefix);
    println!("  Suffix: {}", options.suffix);
    println!("  Cut size: {} bytes", options.cut_size);

    let summary = archive::split_file(input, output_dir, options)?;

    println!("File size: {} bytes", summary.input_size);
    for part in &summary.parts {
        println!("Created {} ({} bytes)", part.path.display(), part.raw_len);
    }
    println!("Split complete: {} parts", summary.parts.len());

    Ok(())
}

fn run_merge(input_dir: &Path, output: &Path) -> Result<()> {
    println!("Merging {} into {}", input_dir.display(), output.display());

    let summary = archive::merge_files(input_dir, output)?;

    for name in &summary.parts {
        println!("Merged {}", name);
    }
    println!(
        "Merge complete: {} parts, {} bytes",
        summary.parts.len(),
        summary.bytes_written
    );

    Ok(())
}
