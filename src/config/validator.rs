//! Configuration validation

use super::*;
use crate::plan::MAX_DIRECTORIES;
use anyhow::Result;

/// Widest zero-padding accepted for indices
const MAX_DIGITS: usize = 20;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_distribution(&config.distribution)?;
    validate_naming(&config.naming)?;

    Ok(())
}

/// Validate distribution configuration
pub fn validate_distribution(distribution: &DistributionConfig) -> Result<()> {
    if distribution.num_directories == 0 {
        anyhow::bail!("num_directories must be at least 1");
    }

    if distribution.num_directories > MAX_DIRECTORIES {
        anyhow::bail!(
            "num_directories must be at most {}, got {}",
            MAX_DIRECTORIES,
            distribution.num_directories
        );
    }

    if distribution.workdir.as_os_str().is_empty() {
        anyhow::bail!("workdir must not be empty");
    }

    Ok(())
}

/// Validate naming configuration
pub fn validate_naming(naming: &NamingConfig) -> Result<()> {
    validate_digits("file_digits", naming.file_digits)?;
    validate_digits("dir_digits", naming.dir_digits)?;

    if naming.file_prefix.is_empty() {
        anyhow::bail!("file_prefix must not be empty");
    }

    for (field, value) in [
        ("file_prefix", &naming.file_prefix),
        ("file_extension", &naming.file_extension),
        ("dir_prefix", &naming.dir_prefix),
    ] {
        if value.contains(['/', '\\']) {
            anyhow::bail!("{} must not contain path separators, got {:?}", field, value);
        }
    }

    Ok(())
}

fn validate_digits(field: &str, digits: usize) -> Result<()> {
    if digits == 0 || digits > MAX_DIGITS {
        anyhow::bail!("{} must be between 1 and {}, got {}", field, MAX_DIGITS, digits);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_zero_directories() {
        let mut config = Config::default();
        config.distribution.num_directories = 0;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("num_directories"));
    }

    #[test]
    fn test_huge_directory_count() {
        let mut config = Config::default();
        config.distribution.num_directories = usize::MAX / 2;

        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("at most"));

        config.distribution.num_directories = MAX_DIRECTORIES;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_zero_files_allowed() {
        let mut config = Config::default();
        config.distribution.total_files = 0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_digit_bounds() {
        let mut config = Config::default();
        config.naming.file_digits = 0;
        assert!(validate_config(&config).is_err());

        config.naming.file_digits = 3;
        config.naming.dir_digits = 21;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_path_separators_rejected() {
        let mut config = Config::default();
        config.naming.dir_prefix = "../dir_".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.naming.file_extension = ".txt/".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_file_prefix() {
        let mut config = Config::default();
        config.naming.file_prefix.clear();
        assert!(validate_config(&config).is_err());
    }
}
