//! Split a file into Base64 part files

use crate::Result;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default raw bytes per part (16 MiB)
pub const DEFAULT_CUT_SIZE: usize = 16 * 1024 * 1024;

/// Split options
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Part file name prefix
    pub prefix: String,
    /// Part file name suffix
    pub suffix: String,
    /// Raw bytes per part before encoding
    pub cut_size: usize,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            prefix: "part".to_string(),
            suffix: ".txt".to_string(),
            cut_size: DEFAULT_CUT_SIZE,
        }
    }
}

/// One written part
#[derive(Debug, Clone)]
pub struct PartInfo {
    pub path: PathBuf,
    /// Raw (pre-encoding) bytes in this part
    pub raw_len: usize,
}

/// Result of a split
#[derive(Debug, Clone)]
pub struct SplitSummary {
    /// Size of the input file
    pub input_size: u64,
    /// Parts in index order
    pub parts: Vec<PartInfo>,
}

/// Part file name: `<prefix><index:03><suffix>`
pub fn part_name(prefix: &str, index: usize, suffix: &str) -> String {
    format!("{}{:03}{}", prefix, index, suffix)
}

/// Split `input` into Base64 part files under `output_dir`
///
/// An empty input produces no parts.
pub fn split_file(input: &Path, output_dir: &Path, options: &SplitOptions) -> Result<SplitSummary> {
    if options.cut_size == 0 {
        anyhow::bail!("cut size must be greater than zero");
    }

    let file = File::open(input)
        .with_context(|| format!("Failed to open source file: {}", input.display()))?;
    let input_size = file.metadata()
        .with_context(|| format!("Failed to stat source file: {}", input.display()))?
        .len();

    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let expected = input_size.div_ceil(options.cut_size as u64);
    debug!(input = %input.display(), size = input_size, parts = expected, "splitting file");

    let mut reader = BufReader::new(file);
    let mut buffer = vec![0u8; options.cut_size];
    let mut parts = Vec::new();

    loop {
        let n = read_chunk(&mut reader, &mut buffer)
            .with_context(|| format!("Failed to read source file: {}", input.display()))?;
        if n == 0 {
            break;
        }

        let path = output_dir.join(part_name(&options.prefix, parts.len(), &options.suffix));
        let encoded = BASE64_STANDARD.encode(&buffer[..n]);
        fs::write(&path, encoded)
            .with_context(|| format!("Failed to write part file: {}", path.display()))?;

        parts.push(PartInfo { path, raw_len: n });

        if n < buffer.len() {
            break;
        }
    }

    Ok(SplitSummary { input_size, parts })
}

/// Fill `buf` as far as possible; returns bytes read (less than `buf.len()` only at EOF)
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn options(cut_size: usize) -> SplitOptions {
        SplitOptions {
            cut_size,
            ..SplitOptions::default()
        }
    }

    #[test]
    fn test_part_name() {
        assert_eq!(part_name("part", 0, ".txt"), "part000.txt");
        assert_eq!(part_name("part", 757, ".txt"), "part757.txt");
        assert_eq!(part_name("chunk_", 1000, ""), "chunk_1000");
    }

    #[test]
    fn test_split_uneven() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("archive.zip");
        fs::write(&input, b"0123456789").unwrap();
        let out_dir = temp_dir.path().join("parts");

        let summary = split_file(&input, &out_dir, &options(4)).unwrap();

        assert_eq!(summary.input_size, 10);
        assert_eq!(summary.parts.len(), 3);
        assert_eq!(summary.parts[2].raw_len, 2);

        assert_eq!(fs::read_to_string(out_dir.join("part000.txt")).unwrap(), "MDEyMw==");
        assert_eq!(fs::read_to_string(out_dir.join("part001.txt")).unwrap(), "NDU2Nw==");
        assert_eq!(fs::read_to_string(out_dir.join("part002.txt")).unwrap(), "ODk=");
        assert!(!out_dir.join("part003.txt").exists());
    }

    #[test]
    fn test_split_exact_multiple() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.bin");
        fs::write(&input, vec![7u8; 8]).unwrap();

        let summary = split_file(&input, temp_dir.path(), &options(4)).unwrap();
        assert_eq!(summary.parts.len(), 2);
        assert!(summary.parts.iter().all(|p| p.raw_len == 4));
    }

    #[test]
    fn test_split_empty_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("empty.bin");
        fs::write(&input, b"").unwrap();
        let out_dir = temp_dir.path().join("parts");

        let summary = split_file(&input, &out_dir, &options(4)).unwrap();
        assert!(summary.parts.is_empty());
        assert!(out_dir.is_dir());
    }

    #[test]
    fn test_split_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let err = split_file(&temp_dir.path().join("nope"), temp_dir.path(), &options(4)).unwrap_err();
        assert!(err.to_string().contains("Failed to open source file"));
    }
}
