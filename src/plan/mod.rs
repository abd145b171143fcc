//! Distribution plan calculation
//!
//! A plan assigns a contiguous range of file indices to every directory.
//! The first `total_files % num_directories` directories receive one extra
//! file each; every other directory receives `total_files / num_directories`.
//! Computing a plan never touches the filesystem.

use std::ops::Range;
use thiserror::Error;

/// Largest number of destination directories a plan accepts
pub const MAX_DIRECTORIES: usize = 100_000;

/// Errors raised while computing a plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// A plan needs at least one destination directory
    #[error("number of directories must be at least 1")]
    NoDirectories,

    /// More directories than a plan supports
    #[error("number of directories must be at most {max}, got {requested}")]
    TooManyDirectories { requested: usize, max: usize },
}

/// Files assigned to a single directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryAssignment {
    /// Zero-based directory index
    pub dir_index: usize,

    /// Half-open range of file indices moved into this directory
    pub files: Range<usize>,
}

impl DirectoryAssignment {
    /// Number of files assigned to this directory
    pub fn count(&self) -> usize {
        self.files.len()
    }

    /// First file index, or `None` if the directory receives no files
    pub fn first(&self) -> Option<usize> {
        (!self.files.is_empty()).then_some(self.files.start)
    }

    /// Last file index (inclusive), or `None` if the directory receives no files
    pub fn last(&self) -> Option<usize> {
        (!self.files.is_empty()).then(|| self.files.end - 1)
    }
}

/// Ordered mapping from directory index to a contiguous range of file indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPlan {
    /// Total number of files being distributed
    pub total_files: usize,

    /// Number of destination directories
    pub num_directories: usize,

    /// Base count every directory receives
    pub files_per_dir: usize,

    /// Number of leading directories that receive one extra file
    pub remaining_files: usize,

    /// Assignments ordered by directory index
    pub assignments: Vec<DirectoryAssignment>,
}

impl DistributionPlan {
    /// Compute the plan for `total_files` spread over `num_directories`
    pub fn compute(total_files: usize, num_directories: usize) -> Result<Self, PlanError> {
        if num_directories == 0 {
            return Err(PlanError::NoDirectories);
        }
        if num_directories > MAX_DIRECTORIES {
            return Err(PlanError::TooManyDirectories {
                requested: num_directories,
                max: MAX_DIRECTORIES,
            });
        }

        let files_per_dir = total_files / num_directories;
        let remaining_files = total_files % num_directories;

        let mut assignments = Vec::with_capacity(num_directories);
        let mut cursor = 0;

        for dir_index in 0..num_directories {
            let count = files_per_dir + usize::from(dir_index < remaining_files);
            assignments.push(DirectoryAssignment {
                dir_index,
                files: cursor..cursor + count,
            });
            cursor += count;
        }

        debug_assert_eq!(cursor, total_files);

        Ok(Self {
            total_files,
            num_directories,
            files_per_dir,
            remaining_files,
            assignments,
        })
    }

    /// Iterate over assignments in directory order
    pub fn iter(&self) -> impl Iterator<Item = &DirectoryAssignment> {
        self.assignments.iter()
    }
}
