use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stockroom/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stockroom").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The delay range is not inverted
    /// - The failure rate is within 0..=1
    /// - At least one reference item is generated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.min_delay_ms > self.source.max_delay_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "source.min_delay_ms ({}) exceeds source.max_delay_ms ({})",
                    self.source.min_delay_ms, self.source.max_delay_ms
                ),
            });
        }

        let rate = self.source.failure_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(ConfigError::ValidationError {
                message: format!("source.failure_rate must be within 0..=1, got {}", rate),
            });
        }

        if self.catalog.item_count == 0 {
            return Err(ConfigError::ValidationError {
                message: "catalog.item_count must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}
