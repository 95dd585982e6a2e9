//! Shared application state.
//!
//! This module provides [`AppState`], which holds shared resources
//! across all HTTP request handlers.

use std::sync::Arc;

use fibonacci_api_common::{ApiConfig, ServerError};
use fibonacci_api_core::Calculator;

/// Shared state across all request handlers.
///
/// This struct is cloned for each request, so it uses `Arc` for shared data.
/// Nothing in it is mutable, so handlers never contend on it.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Calculator with the configured input bounds.
    calculator: Arc<Calculator>,
}

impl AppState {
    /// Create new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured limits are invalid.
    pub fn new(config: &ApiConfig) -> Result<Self, ServerError> {
        config.limits.validate()?;

        Ok(Self {
            calculator: Arc::new(Calculator::new(config.limits)),
        })
    }

    /// Get the calculator.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}
