//! Configuration management

use crate::error::{DiaryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime settings for the diary session, read from a TOML file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Load the built-in sample authors and entries at startup
    pub seed_sample_data: bool,
    /// Default tracing filter when RUST_LOG is unset
    pub log_level: String,
    /// chrono format used to parse dates typed at the prompt
    pub date_input_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed_sample_data: true,
            log_level: "warn".to_string(),
            date_input_format: "%Y-%m-%d".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaryError::ConfigNotFound(path.to_path_buf())
            } else {
                DiaryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.date_input_format.trim().is_empty() {
            return Err(DiaryError::Config(
                "date_input_format cannot be empty".to_string(),
            ));
        }
        if self.log_level.trim().is_empty() {
            return Err(DiaryError::Config("log_level cannot be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.seed_sample_data);
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.date_input_format, "%Y-%m-%d");
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        assert_eq!(Config::load(None).unwrap(), Config::default());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("diary.toml");
        fs::write(&path, "seed_sample_data = false\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert!(!config.seed_sample_data);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_load_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("diary.toml");
        fs::write(
            &path,
            "seed_sample_data = true\nlog_level = \"debug\"\ndate_input_format = \"%d.%m.%Y\"\n",
        )
        .unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.date_input_format, "%d.%m.%Y");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("missing.toml"));

        match result.unwrap_err() {
            DiaryError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("diary.toml");
        fs::write(&path, "seed_sample_data = \"maybe\"").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(DiaryError::TomlDeserialize(_))
        ));
    }

    #[test]
    fn test_empty_date_format_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("diary.toml");
        fs::write(&path, "date_input_format = \"\"").unwrap();

        assert!(matches!(
            Config::load_from_file(&path),
            Err(DiaryError::Config(_))
        ));
    }
}
