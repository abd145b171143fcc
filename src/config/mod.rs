//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//! Every field defaults to the classic layout: `part000.txt` .. `part757.txt`
//! spread over `dir_01` .. `dir_07` in the current directory.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Complete distributor configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub naming: NamingConfig,
}

/// What to distribute and where
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DistributionConfig {
    /// Number of source files (indices 0 .. total_files - 1)
    #[serde(default = "default_total_files")]
    pub total_files: usize,
    /// Number of destination directories
    #[serde(default = "default_num_directories")]
    pub num_directories: usize,
    /// Working directory holding the source files; directories are created here
    #[serde(default = "default_workdir")]
    pub workdir: PathBuf,
}

fn default_total_files() -> usize {
    758
}

fn default_num_directories() -> usize {
    7
}

fn default_workdir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self {
            total_files: default_total_files(),
            num_directories: default_num_directories(),
            workdir: default_workdir(),
        }
    }
}

/// File and directory naming patterns
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamingConfig {
    /// Source file prefix
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
    /// Zero-padded width of the file index
    #[serde(default = "default_file_digits")]
    pub file_digits: usize,
    /// Source file extension, including the dot
    #[serde(default = "default_file_extension")]
    pub file_extension: String,
    /// Destination directory prefix
    #[serde(default = "default_dir_prefix")]
    pub dir_prefix: String,
    /// Zero-padded width of the directory number
    #[serde(default = "default_dir_digits")]
    pub dir_digits: usize,
    /// Number given to the first directory (directory index 0)
    #[serde(default = "default_dir_index_base")]
    pub dir_index_base: usize,
}

fn default_file_prefix() -> String {
    "part".to_string()
}

fn default_file_digits() -> usize {
    3
}

fn default_file_extension() -> String {
    ".txt".to_string()
}

fn default_dir_prefix() -> String {
    "dir_".to_string()
}

fn default_dir_digits() -> usize {
    2
}

fn default_dir_index_base() -> usize {
    1
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            file_digits: default_file_digits(),
            file_extension: default_file_extension(),
            dir_prefix: default_dir_prefix(),
            dir_digits: default_dir_digits(),
            dir_index_base: default_dir_index_base(),
        }
    }
}

impl NamingConfig {
    /// Source file name for a file index (e.g. `part007.txt`)
    pub fn file_name(&self, index: usize) -> String {
        format!(
            "{}{:0width$}{}",
            self.file_prefix,
            index,
            self.file_extension,
            width = self.file_digits
        )
    }

    /// Directory name for a directory index (index 0 is `dir_01` by default)
    pub fn dir_name(&self, index: usize) -> String {
        format!(
            "{}{:0width$}",
            self.dir_prefix,
            index + self.dir_index_base,
            width = self.dir_digits
        )
    }
}

impl Config {
    /// Working directory the distribution runs in
    pub fn workdir(&self) -> &Path {
        &self.distribution.workdir
    }

    /// Path of a source file inside the working directory
    pub fn source_path(&self, file_index: usize) -> PathBuf {
        self.workdir().join(self.naming.file_name(file_index))
    }

    /// Path of a destination directory inside the working directory
    pub fn dir_path(&self, dir_index: usize) -> PathBuf {
        self.workdir().join(self.naming.dir_name(dir_index))
    }
}
