//! Path parameter parsing.
//!
//! Handlers take raw path segments and parse them here, so malformed
//! input produces the same `{"detail": ...}` body as every other error.

use std::num::IntErrorKind;

use axum::extract::Path;
use axum::extract::rejection::PathRejection;

use fibonacci_api_common::ApiError;

/// Parse an extracted integer path parameter.
///
/// Extraction failures (e.g. a segment that is not valid UTF-8 after
/// percent-decoding) are reported like any other unparseable value.
pub fn path_integer(
    name: &str,
    path: Result<Path<String>, PathRejection>,
) -> Result<i64, ApiError> {
    match path {
        Ok(Path(raw)) => parse_path_integer(name, &raw),
        Err(rejection) => Err(ApiError::invalid_parameter(format!(
            "Path parameter '{name}' is invalid: {}",
            rejection.body_text()
        ))),
    }
}

/// Parse an integer path parameter.
///
/// Literals outside the `i64` range saturate to `i64::MAX` / `i64::MIN`,
/// so an oversized index is rejected by the range check rather than
/// reported as unparseable.
///
/// # Errors
///
/// Returns [`ApiError::InvalidParameter`] if `raw` is not an integer literal.
pub fn parse_path_integer(name: &str, raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(ApiError::invalid_parameter(format!(
                "Path parameter '{name}' must be an integer, got '{raw}'"
            ))),
        },
    }
}
