//! Configuration structures for fibonacci-api.
//!
//! - [`ApiConfig`]: Top-level configuration for the calculator
//! - [`LimitsConfig`]: Upper bounds on accepted indexes and sequence counts

use serde::{Deserialize, Serialize};

use crate::ServerError;

/// Top-level calculator configuration.
///
/// Can be loaded from the `[api]` table of a TOML config file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Input bounds.
    #[serde(default)]
    pub limits: LimitsConfig,
}

/// Input bounds enforced before any computation.
///
/// The bound values also appear in the client-facing validation messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct LimitsConfig {
    /// Largest index accepted by `GET /fibonacci/{n}`.
    #[serde(default = "defaults::max_index")]
    pub max_index: i64,

    /// Largest count accepted by `GET /fibonacci/sequence/{count}`.
    #[serde(default = "defaults::max_count")]
    pub max_count: i64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_index: defaults::max_index(),
            max_count: defaults::max_count(),
        }
    }
}

impl LimitsConfig {
    /// Reject limits that would make every request fail.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.max_index < 0 {
            return Err(ServerError::invalid_config(format!(
                "max_index must be non-negative, got {}",
                self.max_index
            )));
        }
        if self.max_count < 1 {
            return Err(ServerError::invalid_config(format!(
                "max_count must be positive, got {}",
                self.max_count
            )));
        }
        Ok(())
    }
}

/// Default value functions for serde.
mod defaults {
    pub const fn max_index() -> i64 {
        10_000
    }

    pub const fn max_count() -> i64 {
        100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();

        assert_eq!(config.limits.max_index, 10_000);
        assert_eq!(config.limits.max_count, 100);
    }

    #[test]
    fn test_config_serialization() {
        let config = ApiConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: ApiConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config.limits, deserialized.limits);
    }

    #[test]
    fn test_partial_deserialization() {
        let json = r#"{"limits": {"max_count": 50}}"#;
        let config: ApiConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.limits.max_count, 50);
        // Unspecified fields fall back to defaults
        assert_eq!(config.limits.max_index, 10_000);
    }

    #[test]
    fn test_validate_limits() {
        assert!(LimitsConfig::default().validate().is_ok());

        let zero_index = LimitsConfig {
            max_index: 0,
            ..Default::default()
        };
        assert!(zero_index.validate().is_ok());

        let negative_index = LimitsConfig {
            max_index: -1,
            ..Default::default()
        };
        assert!(negative_index.validate().is_err());

        let zero_count = LimitsConfig {
            max_count: 0,
            ..Default::default()
        };
        assert!(zero_count.validate().is_err());
    }
}
