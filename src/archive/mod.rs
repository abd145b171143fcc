//! Base64 part files
//!
//! A binary file is split into fixed-size raw chunks, each stored as a
//! Base64 text file named `<prefix><NNN><suffix>` (`part000.txt`, ...).
//! Merging decodes every file of a directory in name order and concatenates
//! the bytes. These part files are the input the distributor spreads across
//! directories.

pub mod merge;
pub mod split;

pub use merge::{merge_files, MergeSummary};
pub use split::{part_name, split_file, SplitOptions, SplitSummary, DEFAULT_CUT_SIZE};
