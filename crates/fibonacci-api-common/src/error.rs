//! Error types for fibonacci-api.
//!
//! This module defines a hierarchy of error types using `thiserror`:
//! - [`EngineError`]: Precondition failures raised by the Fibonacci engine
//! - [`ApiError`]: Request-level failures, each mapped to an HTTP status
//! - [`ServerError`]: Failures while starting or running the HTTP server

use std::io;
use std::net::SocketAddr;

use thiserror::Error;

/// Message shared by the engine precondition and the index validation rule.
pub const NEGATIVE_INDEX_MESSAGE: &str = "Fibonacci is not defined for negative numbers";

/// Errors raised by the Fibonacci engine itself.
///
/// The engine enforces its own precondition so it is safe to call
/// without going through a handler first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested index is below zero.
    #[error("Fibonacci is not defined for negative numbers")]
    NegativeIndex {
        /// The rejected index.
        index: i64,
    },
}

/// Request-level errors.
///
/// Every variant carries the literal `detail` message that is returned
/// to the client as `{"detail": "..."}`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Input is outside the allowed range.
    #[error("{detail}")]
    Validation {
        /// Human-readable reason for the rejection.
        detail: String,
    },

    /// A path parameter could not be parsed as an integer.
    #[error("{detail}")]
    InvalidParameter {
        /// Human-readable reason for the rejection.
        detail: String,
    },

    /// Computation failed unexpectedly.
    #[error("{detail}")]
    Internal {
        /// The underlying failure message.
        detail: String,
    },
}

impl ApiError {
    /// Create a new `Validation` error.
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation {
            detail: detail.into(),
        }
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter(detail: impl Into<String>) -> Self {
        Self::InvalidParameter {
            detail: detail.into(),
        }
    }

    /// Create a new `Internal` error.
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::InvalidParameter { .. } => 422,
            Self::Internal { .. } => 500,
        }
    }

    /// The client-facing message.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation { detail }
            | Self::InvalidParameter { detail }
            | Self::Internal { detail } => detail,
        }
    }

    /// Returns `true` if this error was caused by an out-of-range input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        Self::internal(err.to_string())
    }
}

/// Errors from the server lifecycle.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        /// The address that was requested.
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] io::Error),

    /// Invalid configuration was provided.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the configuration error.
        reason: String,
    },
}

impl ServerError {
    /// Create a new `InvalidConfig` error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
