use reqwest::Url;
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
    /// Uses `~/.config/ghsearch/config.toml` on Linux, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("ghsearch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file yields `Config::default()`.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the
    /// caller named it.
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
    /// - The endpoint is an absolute `http`/`https` URL
    /// - Both timeouts are positive and the connect timeout fits in the total
    /// - The UI tick rate is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let search = &self.search;

        let endpoint = Url::parse(&search.endpoint).map_err(|e| ConfigError::ValidationError {
            message: format!("Invalid search endpoint '{}': {}", search.endpoint, e),
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Search endpoint must use http or https, got '{}'",
                    endpoint.scheme()
                ),
            });
        }

        if search.timeout_seconds == 0 || search.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if search.connect_timeout_seconds > search.timeout_seconds {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "connect_timeout_seconds ({}) exceeds timeout_seconds ({})",
                    search.connect_timeout_seconds, search.timeout_seconds
                ),
            });
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
