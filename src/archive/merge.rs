//! Merge Base64 part files back into one file

use crate::Result;
use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Result of a merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    /// Part files decoded, in merge order
    pub parts: Vec<String>,
    /// Decoded bytes written to the output
    pub bytes_written: u64,
}

/// Decode every regular file in `input_dir` (in part index order) into `output`
pub fn merge_files(input_dir: &Path, output: &Path) -> Result<MergeSummary> {
    let mut names = Vec::new();
    for entry in fs::read_dir(input_dir)
        .with_context(|| format!("Failed to read input directory: {}", input_dir.display()))?
    {
        let entry = entry
            .with_context(|| format!("Failed to read input directory: {}", input_dir.display()))?;
        if entry.file_type()?.is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    if names.is_empty() {
        anyhow::bail!("No part files found in {}", input_dir.display());
    }

    names.sort_by(|a, b| part_sort_key(a).cmp(&part_sort_key(b)).then_with(|| a.cmp(b)));
    debug!(dir = %input_dir.display(), parts = names.len(), "merging part files");

    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    let mut bytes_written = 0u64;

    for name in &names {
        let path = input_dir.join(name);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read part file: {}", path.display()))?;

        let decoded = BASE64_STANDARD
            .decode(content.trim_end())
            .with_context(|| format!("Failed to decode part file: {}", path.display()))?;

        writer.write_all(&decoded)
            .with_context(|| format!("Failed to write output file: {}", output.display()))?;
        bytes_written += decoded.len() as u64;
    }

    writer.flush()
        .with_context(|| format!("Failed to write output file: {}", output.display()))?;

    Ok(MergeSummary {
        parts: names,
        bytes_written,
    })
}

/// Ordering key comparing the last run of digits numerically
///
/// `part999.txt` sorts before `part1000.txt`; names without digits compare
/// by their text.
fn part_sort_key(name: &str) -> (&str, usize, &str, &str) {
    let bytes = name.as_bytes();
    let Some(last_digit) = bytes.iter().rposition(u8::is_ascii_digit) else {
        return (name, 0, "", "");
    };
    let end = last_digit + 1;
    let start = bytes[..end]
        .iter()
        .rposition(|b| !b.is_ascii_digit())
        .map_or(0, |i| i + 1);

    let digits = name[start..end].trim_start_matches('0');
    (&name[..start], digits.len(), digits, &name[end..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::split::{split_file, SplitOptions};
    use tempfile::TempDir;

    #[test]
    fn test_merge_restores_split() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("archive.zip");
        let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        fs::write(&input, &data).unwrap();

        let parts_dir = temp_dir.path().join("parts");
        let options = SplitOptions {
            cut_size: 64,
            ..SplitOptions::default()
        };
        split_file(&input, &parts_dir, &options).unwrap();

        let restored = temp_dir.path().join("restored.zip");
        let summary = merge_files(&parts_dir, &restored).unwrap();

        assert_eq!(summary.parts.len(), 16);
        assert_eq!(summary.parts[0], "part000.txt");
        assert_eq!(summary.bytes_written, 1000);
        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_merge_past_three_digit_indices() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("archive.bin");
        let data: Vec<u8> = (0..1012u32).map(|i| (i % 251) as u8).collect();
        fs::write(&input, &data).unwrap();

        let parts_dir = temp_dir.path().join("parts");
        let options = SplitOptions {
            cut_size: 1,
            ..SplitOptions::default()
        };
        split_file(&input, &parts_dir, &options).unwrap();

        let restored = temp_dir.path().join("restored.bin");
        let summary = merge_files(&parts_dir, &restored).unwrap();

        assert_eq!(summary.parts.len(), 1012);
        assert_eq!(summary.parts[999], "part999.txt");
        assert_eq!(summary.parts[1000], "part1000.txt");
        assert_eq!(summary.parts[1011], "part1011.txt");
        assert_eq!(fs::read(&restored).unwrap(), data);
    }

    #[test]
    fn test_part_sort_key_numeric() {
        let mut names = vec!["part1000.txt", "part101.txt", "part099.txt", "part100.txt", "notes"];
        names.sort_by(|a, b| part_sort_key(a).cmp(&part_sort_key(b)).then_with(|| a.cmp(b)));
        assert_eq!(names, vec!["notes", "part099.txt", "part100.txt", "part101.txt", "part1000.txt"]);
    }

    #[test]
    fn test_merge_name_order() {
        let temp_dir = TempDir::new().unwrap();
        let parts_dir = temp_dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();
        fs::write(parts_dir.join("part001.txt"), "d29ybGQ=\n").unwrap();
        fs::write(parts_dir.join("part000.txt"), "aGVsbG8g").unwrap();
        fs::create_dir(parts_dir.join("nested")).unwrap();

        let output = temp_dir.path().join("out.txt");
        merge_files(&parts_dir, &output).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "hello world");
    }

    #[test]
    fn test_merge_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let parts_dir = temp_dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();

        let err = merge_files(&parts_dir, &temp_dir.path().join("out")).unwrap_err();
        assert!(err.to_string().contains("No part files found"));
    }

    #[test]
    fn test_merge_invalid_base64() {
        let temp_dir = TempDir::new().unwrap();
        let parts_dir = temp_dir.path().join("parts");
        fs::create_dir(&parts_dir).unwrap();
        fs::write(parts_dir.join("part000.txt"), "not base64!").unwrap();

        let err = merge_files(&parts_dir, &temp_dir.path().join("out")).unwrap_err();
        assert!(err.to_string().contains("Failed to decode part file"));
    }
}
