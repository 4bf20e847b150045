//! Configuration management for thyfmt.
//!
//! This module provides the [`Config`] struct which controls formatting.
//! Configuration comes from, lowest precedence first:
//! - built-in defaults
//! - an explicit TOML file (`-c/--config`)
//! - CLI arguments
//! - In-file directives (`(* thyfmt: --indent 4 *)`)
//!
//! Nothing is read implicitly: the same document and arguments always give
//! the same output.

use std::path::Path;

use serde::Deserialize;

const DEFAULT_INDENT: usize = 2;
const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Main configuration struct for thyfmt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of spaces per indentation level (default: 2)
    pub indent: usize,

    /// Inputs larger than this many bytes are rejected (default: 100 MiB)
    pub max_file_size: u64,
}

/// Partial configuration for TOML parsing
///
/// Every field is optional so that loading only overrides what the file
/// actually sets.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PartialConfig {
    pub indent: Option<usize>,
    pub max_file_size: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            indent: DEFAULT_INDENT,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl Config {
    /// Maximum reasonable indent size
    const MAX_INDENT: usize = 16;

    /// Validate configuration values are within reasonable bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    #[must_use]
    pub fn validate(&self) -> Option<String> {
        if self.indent == 0 {
            return Some("indent must be at least 1".to_string());
        }
        if self.indent > Self::MAX_INDENT {
            return Some(format!(
                "indent {} exceeds maximum of {}",
                self.indent,
                Self::MAX_INDENT
            ));
        }
        if self.max_file_size == 0 {
            return Some("max_file_size must be at least 1".to_string());
        }
        None
    }

    /// Load configuration from a TOML file
    pub fn from_toml_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let partial: PartialConfig = toml::from_str(&contents)?;
        let mut config = Self::default();
        config.apply_partial(&partial);
        Ok(config)
    }

    /// Apply a partial config, only overriding fields that are explicitly set
    fn apply_partial(&mut self, partial: &PartialConfig) {
        if let Some(v) = partial.indent {
            self.indent = v;
        }
        if let Some(v) = partial.max_file_size {
            self.max_file_size = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert_eq!(config.max_file_size, 100 * 1024 * 1024);
    }

    #[test]
    fn test_config_apply_partial_preserves_unset() {
        let mut base = Config {
            indent: 4,
            ..Default::default()
        };
        let partial = PartialConfig {
            max_file_size: Some(10),
            ..Default::default()
        };

        base.apply_partial(&partial);
        assert_eq!(base.indent, 4);
        assert_eq!(base.max_file_size, 10);
    }

    #[test]
    fn test_partial_from_toml() {
        let partial: PartialConfig = toml::from_str("indent = 3\n").unwrap();
        assert_eq!(partial.indent, Some(3));
        assert_eq!(partial.max_file_size, None);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(toml::from_str::<PartialConfig>("indnet = 3\n").is_err());
    }

    #[test]
    fn test_empty_toml_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.toml");
        std::fs::write(&path, "").unwrap();
        assert_eq!(Config::from_toml_file(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_validate_default_config() {
        assert!(Config::default().validate().is_none());
    }

    #[test]
    fn test_validate_indent_zero() {
        let config = Config {
            indent: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("indent"));
    }

    #[test]
    fn test_validate_indent_too_large() {
        let config = Config {
            indent: 100,
            ..Default::default()
        };
        assert!(config.validate().is_some());
    }

    #[test]
    fn test_validate_max_file_size_zero() {
        let config = Config {
            max_file_size: 0,
            ..Default::default()
        };
        assert!(config.validate().unwrap().contains("max_file_size"));
    }
}
