//! Request handlers for the Fibonacci endpoints.
//!
//! Each handler parses its path parameter, runs the shared
//! [`Calculator`](fibonacci_api_core::Calculator) on the blocking pool and
//! renders either the result record or an `{"detail": ...}` error.

use std::time::Instant;

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use fibonacci_api_common::ApiError;
use fibonacci_api_core::{SequenceResult, SingleResult};

use crate::request::path_integer;
use crate::response::{ErrorResponse, status_response};
use crate::state::AppState;

/// Compute a single Fibonacci number.
///
/// `GET /fibonacci/:n`
#[instrument(skip_all)]
pub async fn fibonacci_number(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SingleResult>, ErrorResponse> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let calculator = *state.calculator();

    let result = match path_integer("n", path) {
        Ok(n) => compute(move || calculator.single(n)).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(single) => {
            info!(
                request_id = %request_id,
                input = single.input,
                calculation_time_seconds = single.calculation_time_seconds,
                duration_ms = start.elapsed().as_millis(),
                "Request completed"
            );
            Ok(Json(single))
        }
        Err(e) => {
            log_rejection(&request_id, &e);
            Err(e.into())
        }
    }
}

/// Compute the first `count` Fibonacci numbers.
///
/// `GET /fibonacci/sequence/:count`
#[instrument(skip_all)]
pub async fn fibonacci_sequence(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<SequenceResult>, ErrorResponse> {
    let start = Instant::now();
    let request_id = Uuid::new_v4().to_string();
    let calculator = *state.calculator();

    let result = match path_integer("count", path) {
        Ok(count) => compute(move || calculator.sequence(count)).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(sequence) => {
            info!(
                request_id = %request_id,
                count = sequence.count,
                calculation_time_seconds = sequence.calculation_time_seconds,
                duration_ms = start.elapsed().as_millis(),
                "Request completed"
            );
            Ok(Json(sequence))
        }
        Err(e) => {
            log_rejection(&request_id, &e);
            Err(e.into())
        }
    }
}

/// Run a CPU-bound calculation off the async workers.
async fn compute<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ApiError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| ApiError::internal(e.to_string()))?
}

fn log_rejection(request_id: &str, err: &ApiError) {
    if err.status_code() >= 500 {
        error!(
            request_id = %request_id,
            status = err.status_code(),
            error = %err,
            "Request failed"
        );
    } else {
        warn!(
            request_id = %request_id,
            status = err.status_code(),
            error = %err,
            "Request rejected"
        );
    }
}

/// API information handler.
///
/// Returns the service name, version and available endpoints.
pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Fibonacci Calculator API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/fibonacci/{n}": "Calculate the nth Fibonacci number",
            "/fibonacci/sequence/{count}": "Generate the first count Fibonacci numbers",
        }
    }))
}

/// Health check handler.
///
/// Returns 200 OK if the server is running.
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Fallback for unknown routes.
pub async fn not_found() -> impl IntoResponse {
    status_response(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibonacci_api_common::ApiConfig;

    fn state() -> State<AppState> {
        State(AppState::new(&ApiConfig::default()).unwrap())
    }

    #[tokio::test]
    async fn test_fibonacci_number_ok() {
        let Json(result) = fibonacci_number(state(), Ok(Path("10".to_string())))
            .await
            .unwrap();
        assert_eq!(result.input, 10);
        assert_eq!(result.fibonacci.to_string(), "55");
    }

    #[tokio::test]
    async fn test_fibonacci_number_invalid_parameter() {
        let err = fibonacci_number(state(), Ok(Path("ten".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_fibonacci_sequence_rejects_zero() {
        let err = fibonacci_sequence(state(), Ok(Path("0".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.0.detail(), "Count must be a positive integer");
    }

    #[tokio::test]
    async fn test_compute_reports_panics_as_internal() {
        let err = compute::<(), _>(|| panic!("worker died")).await.unwrap_err();
        assert_eq!(err.status_code(), 500);
    }
}
