//! Validating handlers around the Fibonacci engine.
//!
//! [`Calculator`] owns the input bounds and implements the two request
//! pipelines: validate, compute under a timer, shape the result. It holds
//! no mutable state, so one instance is shared by every request.

use tracing::debug;

use fibonacci_api_common::error::NEGATIVE_INDEX_MESSAGE;
use fibonacci_api_common::{ApiError, LimitsConfig};

use crate::engine::fibonacci;
use crate::result::{SequenceResult, SingleResult};
use crate::timing::timed;

/// Request handlers for single values and sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    limits: LimitsConfig,
}

impl Calculator {
    /// Create a calculator enforcing the given bounds.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// The bounds this calculator enforces.
    pub fn limits(&self) -> &LimitsConfig {
        &self.limits
    }

    /// Compute F(n) for a single index.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if `n` is negative or above `max_index`
    /// - [`ApiError::Internal`] if the engine fails
    pub fn single(&self, n: i64) -> Result<SingleResult, ApiError> {
        self.validate_index(n)?;

        let (value, seconds) = timed(|| fibonacci(n));
        let value = value?;

        debug!(
            input = n,
            bits = value.bits(),
            seconds,
            "Computed Fibonacci number"
        );

        Ok(SingleResult {
            input: n,
            fibonacci: value,
            calculation_time_seconds: seconds,
        })
    }

    /// Compute F(0) through F(count - 1).
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if `count` is below 1 or above `max_count`
    /// - [`ApiError::Internal`] if the engine fails
    pub fn sequence(&self, count: i64) -> Result<SequenceResult, ApiError> {
        self.validate_count(count)?;

        let (sequence, seconds) =
            timed(|| (0..count).map(fibonacci).collect::<Result<Vec<_>, _>>());
        let sequence = sequence?;

        debug!(count, seconds, "Computed Fibonacci sequence");

        Ok(SequenceResult {
            count,
            sequence,
            calculation_time_seconds: seconds,
        })
    }

    fn validate_index(&self, n: i64) -> Result<(), ApiError> {
        if n < 0 {
            return Err(ApiError::validation(NEGATIVE_INDEX_MESSAGE));
        }
        if n > self.limits.max_index {
            return Err(ApiError::validation(format!(
                "Number too large. Please use n <= {}",
                self.limits.max_index
            )));
        }
        Ok(())
    }

    fn validate_count(&self, count: i64) -> Result<(), ApiError> {
        if count < 1 {
            return Err(ApiError::validation("Count must be a positive integer"));
        }
        if count > self.limits.max_count {
            return Err(ApiError::validation(format!(
                "Count too large. Please use count <= {}",
                self.limits.max_count
            )));
        }
        Ok(())
    }
}
