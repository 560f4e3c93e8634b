//! Configuration management
//!
//! Loads and saves configuration from XDG-compliant paths.
//! Config location: ~/.config/seq-analyzer/config.toml

pub mod defaults;

use crate::error::{Error, Result};
use defaults::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default values for analysis input and output
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Statistical and presentation settings
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Default values for analysis input and output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Token type to select from record dumps
    #[serde(default = "default_token_type")]
    pub token_type: String,

    /// Token input file ("-" for stdin)
    #[serde(default = "default_input")]
    pub input: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

/// Statistical and presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// p-value below which a position is reported as low
    #[serde(default = "default_significance")]
    pub significance: f64,

    /// Maximum histogram bar width in the text chart (0 = unscaled)
    #[serde(default = "default_max_bar_width")]
    pub max_bar_width: usize,
}

// Default value functions for serde
fn default_token_type() -> String {
    DEFAULT_TOKEN_TYPE.to_string()
}
fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}
fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}
fn default_significance() -> f64 {
    DEFAULT_SIGNIFICANCE
}
fn default_max_bar_width() -> usize {
    DEFAULT_MAX_BAR_WIDTH
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            token_type: default_token_type(),
            input: default_input(),
            format: default_format(),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            significance: default_significance(),
            max_bar_width: default_max_bar_width(),
        }
    }
}

/// Check that a significance level lies strictly between 0 and 1
pub fn validate_significance(value: f64) -> Result<f64> {
    if value > 0.0 && value < 1.0 {
        Ok(value)
    } else {
        Err(Error::Config(format!(
            "Significance must be between 0 and 1 (exclusive), got {}",
            value
        )))
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|p| p.join(APP_DIR_NAME))
            .ok_or_else(|| Error::Config("Could not determine config directory".to_string()))
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Load configuration from the default path
    ///
    /// Creates default config if file doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from a specific path
    ///
    /// Creates default config at `path` if the file doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| Error::Config(format!("Failed to read config file: {}", e)))?;

            let config: Config = toml::from_str(&content)
                .map_err(|e| Error::Config(format!("Failed to parse config file: {}", e)))?;

            validate_significance(config.analysis.significance)?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(path)?;
            debug!(path = %path.display(), "created default config");
            Ok(config)
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Get a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns the value as a string, or None if not found
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "token_type"] => Some(self.defaults.token_type.clone()),
            ["defaults", "input"] => Some(self.defaults.input.clone()),
            ["defaults", "format"] => Some(self.defaults.format.clone()),

            ["analysis", "significance"] => Some(self.analysis.significance.to_string()),
            ["analysis", "max_bar_width"] => Some(self.analysis.max_bar_width.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key path
    ///
    /// Key format: "section.key"
    /// Returns error if key is invalid or value type is wrong
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let parts: Vec<&str> = key.split('.').collect();

        match parts.as_slice() {
            ["defaults", "token_type"] => {
                self.defaults.token_type = value.to_string();
            }
            ["defaults", "input"] => {
                self.defaults.input = value.to_string();
            }
            ["defaults", "format"] => {
                self.defaults.format = value.to_string();
            }

            ["analysis", "significance"] => {
                let parsed: f64 = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid significance value: {}", value))
                })?;
                self.analysis.significance = validate_significance(parsed)?;
            }
            ["analysis", "max_bar_width"] => {
                self.analysis.max_bar_width = value.parse().map_err(|_| {
                    Error::Config(format!("Invalid bar width value: {}", value))
                })?;
            }

            _ => {
                return Err(Error::Config(format!("Unknown config key: {}", key)));
            }
        }

        Ok(())
    }

    /// List all available config keys
    pub fn available_keys() -> Vec<&'static str> {
        vec![
            "defaults.token_type",
            "defaults.input",
            "defaults.format",
            "analysis.significance",
            "analysis.max_bar_width",
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.defaults.token_type, "session_nonce");
        assert_eq!(config.defaults.input, "tokens.txt");
        assert_eq!(config.defaults.format, "text");
        assert_eq!(config.analysis.significance, 0.01);
        assert_eq!(config.analysis.max_bar_width, 0);
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        assert_eq!(
            config.get("defaults.token_type"),
            Some("session_nonce".to_string())
        );

        config.set("defaults.token_type", "auth_token").unwrap();
        assert_eq!(
            config.get("defaults.token_type"),
            Some("auth_token".to_string())
        );

        config.set("analysis.significance", "0.05").unwrap();
        assert_eq!(config.get("analysis.significance"), Some("0.05".to_string()));
        assert_eq!(config.analysis.significance, 0.05);

        config.set("analysis.max_bar_width", "60").unwrap();
        assert_eq!(config.analysis.max_bar_width, 60);
    }

    #[test]
    fn test_get_invalid_key() {
        let config = Config::default();
        assert_eq!(config.get("invalid.key"), None);
        assert_eq!(config.get("defaults"), None);
    }

    #[test]
    fn test_set_invalid_key() {
        let mut config = Config::default();
        let result = config.set("invalid.key", "value");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_invalid_value() {
        let mut config = Config::default();
        assert!(config.set("analysis.significance", "not_a_number").is_err());
        assert!(config.set("analysis.max_bar_width", "-3").is_err());
    }

    #[test]
    fn test_set_significance_out_of_range() {
        let mut config = Config::default();
        assert!(config.set("analysis.significance", "0").is_err());
        assert!(config.set("analysis.significance", "1").is_err());
        assert!(config.set("analysis.significance", "1.5").is_err());
        assert_eq!(config.analysis.significance, 0.01);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.defaults.token_type = "auth_token".to_string();
        config.analysis.significance = 0.001;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.defaults.token_type, "auth_token");
        assert_eq!(loaded.analysis.significance, 0.001);
    }

    #[test]
    fn test_load_creates_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let config = Config::load_from(&path).unwrap();
        assert!(path.exists());
        assert_eq!(config.defaults.token_type, "session_nonce");
    }

    #[test]
    fn test_load_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analysis]\nmax_bar_width = 40\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.analysis.max_bar_width, 40);
        assert_eq!(config.analysis.significance, 0.01);
        assert_eq!(config.defaults.format, "text");
    }

    #[test]
    fn test_load_rejects_bad_significance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[analysis]\nsignificance = 2.0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let loaded: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(loaded.defaults.token_type, "session_nonce");
        assert_eq!(loaded.analysis.significance, 0.01);
    }

    #[test]
    fn test_serialization_format() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();

        assert!(toml.contains("[defaults]"));
        assert!(toml.contains("[analysis]"));
    }

    #[test]
    fn test_available_keys() {
        let keys = Config::available_keys();
        let config = Config::default();
        for key in &keys {
            assert!(config.get(key).is_some(), "{} should be readable", key);
        }
        assert!(keys.contains(&"analysis.significance"));
    }
}
