//! Common types, errors, and configuration for fibonacci-api.
//!
//! This crate provides shared functionality used across the fibonacci-api workspace:
//! - Error types using `thiserror` for type-safe error handling
//! - Configuration structures for request limits
//! - TOML configuration file loading

pub mod config;
pub mod config_file;
pub mod error;

pub use config::{ApiConfig, LimitsConfig};
pub use config_file::{ConfigFile, ConfigFileError, ServerConfigFile};
pub use error::{ApiError, EngineError, ServerError};
