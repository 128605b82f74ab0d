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
    /// Uses `~/.config/boatwatch/config.toml` on Unix/macOS, or the
    /// equivalent elsewhere via `dirs::config_dir()`. Falls back to the
    /// current directory if there is no config dir.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("boatwatch").join("config.toml")
    }

    /// Loads configuration from the default config file, or defaults if
    /// there is none.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from(&path)
    }

    /// Loads and validates configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
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
    /// - The bus keeps at least one message per topic
    /// - A similarity criterion is set
    /// - The location is either fully set and in range, or unset
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bus.capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "bus.capacity must be at least 1".to_string(),
            });
        }

        if self.views.similar_by.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "views.similar_by must not be empty".to_string(),
            });
        }

        match (self.location.latitude, self.location.longitude) {
            (None, None) => {}
            (Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) {
                    return Err(ConfigError::ValidationError {
                        message: format!("location.latitude {} is out of range", latitude),
                    });
                }
                if !(-180.0..=180.0).contains(&longitude) {
                    return Err(ConfigError::ValidationError {
                        message: format!("location.longitude {} is out of range", longitude),
                    });
                }
            }
            _ => {
                return Err(ConfigError::ValidationError {
                    message: "location needs both latitude and longitude".to_string(),
                });
            }
        }

        Ok(())
    }
}
