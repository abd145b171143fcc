//! CLI argument parsing using clap

use crate::plan::MAX_DIRECTORIES;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Plan preview format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PreviewFormat {
    /// Human-readable lines (default)
    Text,
    /// JSON document
    Json,
}

/// partdist - Distribute part files evenly across numbered directories
///
/// Without a subcommand, prints the distribution plan and asks before
/// moving anything.
#[derive(Parser, Debug)]
#[command(name = "partdist")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Move files without asking for confirmation
    #[arg(long)]
    pub execute: bool,

    /// TOML configuration file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of source files to distribute
    #[arg(short = 'n', long)]
    pub total_files: Option<usize>,

    /// Number of destination directories
    #[arg(short = 'd', long)]
    pub directories: Option<usize>,

    /// Working directory holding the source files
    #[arg(short = 'C', long, value_name = "DIR")]
    pub workdir: Option<PathBuf>,

    /// Plan preview format
    #[arg(long, value_enum, default_value = "text")]
    pub format: PreviewFormat,

    /// Enable debug diagnostics on stderr
    #[arg(long, global = true)]
    pub debug: bool,
}

/// Part file tooling
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Split a file into Base64-encoded part files
    Split {
        /// File to split
        input: PathBuf,

        /// Directory the part files are written to
        output_dir: PathBuf,

        /// Part file name prefix
        #[arg(long, default_value = "part")]
        prefix: String,

        /// Part file name suffix
        #[arg(long, default_value = ".txt")]
        suffix: String,

        /// Raw bytes per part (e.g., 4k, 16M, 1G); a bare number means megabytes
        #[arg(long, default_value = "16M")]
        cut_size: String,
    },

    /// Merge Base64-encoded part files back into one file
    Merge {
        /// Directory holding the part files
        input_dir: PathBuf,

        /// Reassembled output file
        output: PathBuf,
    },
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.directories == Some(0) {
            anyhow::bail!("directories must be at least 1");
        }
        if let Some(directories) = self.directories.filter(|&d| d > MAX_DIRECTORIES) {
            anyhow::bail!("directories must be at most {}, got {}", MAX_DIRECTORIES, directories);
        }

        if let Some(Command::Split { prefix, suffix, .. }) = &self.command {
            if prefix.contains(['/', '\\']) || suffix.contains(['/', '\\']) {
                anyhow::bail!("prefix and suffix must not contain path separators");
            }
        }

        Ok(())
    }
}
