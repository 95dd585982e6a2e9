//! Configuration file structures for fibonacci-api.
//!
//! This module defines structures for TOML configuration files:
//! - [`ConfigFile`]: Top-level configuration file structure
//! - [`ServerConfigFile`]: HTTP server settings

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ApiConfig;

/// Top-level configuration file structure.
///
/// # Example
///
/// ```toml
/// [api.limits]
/// max_index = 10_000
/// max_count = 100
///
/// [server]
/// bind_addr = "0.0.0.0:8000"
/// request_timeout_secs = 30
/// graceful_shutdown = true
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    /// Calculator configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfigFile,
}

impl ConfigFile {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        let config = Self::from_toml(&content)?;
        debug!(path = %path.display(), "Configuration file loaded");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content).map_err(|e| ConfigFileError::Parse {
            message: e.to_string(),
        })
    }
}

/// HTTP server configuration from config file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfigFile {
    /// Bind address (e.g., "0.0.0.0:8000").
    #[serde(default = "defaults::bind_addr")]
    pub bind_addr: String,

    /// Request timeout in seconds.
    #[serde(default = "defaults::request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Enable graceful shutdown.
    #[serde(default = "defaults::graceful_shutdown")]
    pub graceful_shutdown: bool,
}

impl Default for ServerConfigFile {
    fn default() -> Self {
        Self {
            bind_addr: defaults::bind_addr(),
            request_timeout_secs: defaults::request_timeout_secs(),
            graceful_shutdown: defaults::graceful_shutdown(),
        }
    }
}

/// Configuration file errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("Failed to parse config file: {message}")]
    Parse { message: String },
}

/// Default value functions for serde.
mod defaults {
    pub fn bind_addr() -> String {
        "0.0.0.0:8000".to_string()
    }

    pub const fn request_timeout_secs() -> u64 {
        30
    }

    pub const fn graceful_shutdown() -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file() {
        let config = ConfigFile::default();

        assert_eq!(config.server.bind_addr, "0.0.0.0:8000");
        assert_eq!(config.server.request_timeout_secs, 30);
        assert!(config.server.graceful_shutdown);
        assert_eq!(config.api.limits.max_index, 10_000);
        assert_eq!(config.api.limits.max_count, 100);
    }

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
            [server]
            bind_addr = "127.0.0.1:3000"
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.server.bind_addr, "127.0.0.1:3000");
        // Defaults applied
        assert_eq!(config.server.request_timeout_secs, 30);
        assert_eq!(config.api.limits.max_count, 100);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [api.limits]
            max_index = 500
            max_count = 20

            [server]
            bind_addr = "0.0.0.0:9000"
            request_timeout_secs = 60
            graceful_shutdown = false
        "#;

        let config = ConfigFile::from_toml(toml).unwrap();

        assert_eq!(config.api.limits.max_index, 500);
        assert_eq!(config.api.limits.max_count, 20);
        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.server.request_timeout_secs, 60);
        assert!(!config.server.graceful_shutdown);
    }

    #[test]
    fn test_parse_invalid_toml() {
        let invalid = "this is not valid toml [";
        let result = ConfigFile::from_toml(invalid);
        assert!(matches!(result, Err(ConfigFileError::Parse { .. })));
    }

    #[test]
    fn test_missing_file() {
        let result = ConfigFile::from_file("/nonexistent/fibonacci-api.toml");
        assert!(matches!(result, Err(ConfigFileError::Io { .. })));
    }
}
