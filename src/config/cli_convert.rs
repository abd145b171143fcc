//! CLI string conversion utilities

use anyhow::{Context, Result};

/// Parse a size string (e.g., "16M", "4k", "1G") to bytes
pub fn parse_size(s: &str) -> Result<u64> {
    let s = s.trim().to_lowercase();

    let (num_str, multiplier) = if s.ends_with("k") || s.ends_with("kb") {
        (s.trim_end_matches("kb").trim_end_matches("k"), 1024u64)
    } else if s.ends_with("m") || s.ends_with("mb") {
        (s.trim_end_matches("mb").trim_end_matches("m"), 1024 * 1024)
    } else if s.ends_with("g") || s.ends_with("gb") {
        (s.trim_end_matches("gb").trim_end_matches("g"), 1024 * 1024 * 1024)
    } else if s.ends_with("b") {
        (s.trim_end_matches("b"), 1)
    } else {
        (s.as_str(), 1)
    };

    let num: u64 = num_str.trim().parse()
        .with_context(|| format!("Invalid size format: {}", s))?;

    num.checked_mul(multiplier)
        .with_context(|| format!("Size out of range: {}", s))
}

/// Parse a chunk size for splitting; zero is rejected
///
/// A bare number is taken as megabytes (`16` is 16 MiB).
pub fn parse_cut_size(s: &str) -> Result<usize> {
    let trimmed = s.trim();
    let bytes = if !trimmed.is_empty() && trimmed.bytes().all(|b| b.is_ascii_digit()) {
        parse_size(&format!("{}m", trimmed))?
    } else {
        parse_size(trimmed)?
    };
    if bytes == 0 {
        anyhow::bail!("cut size must be greater than zero");
    }
    usize::try_from(bytes).with_context(|| format!("Cut size too large: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size_bytes() {
        assert_eq!(parse_size("4096").unwrap(), 4096);
        assert_eq!(parse_size("512b").unwrap(), 512);
    }

    #[test]
    fn test_parse_size_kb() {
        assert_eq!(parse_size("4k").unwrap(), 4096);
        assert_eq!(parse_size("4K").unwrap(), 4096);
        assert_eq!(parse_size("4kb").unwrap(), 4096);
        assert_eq!(parse_size("4KB").unwrap(), 4096);
    }

    #[test]
    fn test_parse_size_mb() {
        assert_eq!(parse_size("16m").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_size("16M").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_size("1mb").unwrap(), 1024 * 1024);
    }

    #[test]
    fn test_parse_size_gb() {
        assert_eq!(parse_size("1g").unwrap(), 1024 * 1024 * 1024);
    }

    #[test]
    fn test_parse_size_invalid() {
        assert!(parse_size("abc").is_err());
        assert!(parse_size("").is_err());
        assert!(parse_size("-1k").is_err());
    }

    #[test]
    fn test_parse_cut_size() {
        assert_eq!(parse_cut_size("16M").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_cut_size("16").unwrap(), 16 * 1024 * 1024);
        assert_eq!(parse_cut_size("512b").unwrap(), 512);
        assert_eq!(parse_cut_size("4k").unwrap(), 4096);
        assert!(parse_cut_size("0").is_err());
        assert!(parse_cut_size("0k").is_err());
    }
}
