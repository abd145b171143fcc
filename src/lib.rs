//! partdist - Distribute part files across numbered directories
//!
//! partdist takes a flat working directory holding sequentially numbered
//! files (`part000.txt`, `part001.txt`, ...) and moves them into a fixed number
//! of numbered directories (`dir_01`, `dir_02`, ...), balancing the counts so
//! that no two directories differ by more than one file.
//!
//! # Architecture
//!
//! - **Plan**: pure computation of which file indices land in which directory
//! - **Output**: text and JSON rendering of a plan (no side effects)
//! - **Executor**: creates directories and moves files, isolating per-file errors
//! - **Gate**: the preview → explicit opt-in decision before anything moves
//! - **Archive**: split a binary file into Base64 part files and merge them back

pub mod archive;
pub mod config;
pub mod executor;
pub mod gate;
pub mod output;
pub mod plan;

// Re-export commonly used types
pub use config::Config;
pub use executor::{ExecutionReport, Executor};
pub use plan::DistributionPlan;

/// Result type used throughout partdist
pub type Result<T> = anyhow::Result<T>;
