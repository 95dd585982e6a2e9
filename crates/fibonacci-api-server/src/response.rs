//! HTTP responses for calculator errors.
//!
//! Every failure is rendered as `{"detail": "<message>"}` with the status
//! code carried by the [`ApiError`].

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use fibonacci_api_common::ApiError;

/// JSON body for error responses.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Human-readable reason for the failure.
    pub detail: String,
}

/// An [`ApiError`] ready to be returned from an axum handler.
#[derive(Debug)]
pub struct ErrorResponse(pub ApiError);

impl ErrorResponse {
    /// Wrap an [`ApiError`].
    pub fn new(error: ApiError) -> Self {
        Self(error)
    }

    /// HTTP status of this response.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<ApiError> for ErrorResponse {
    fn from(error: ApiError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            detail: self.0.detail().to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Render a bare status code with its canonical reason as the detail.
pub fn status_response(status: StatusCode) -> Response {
    let body = ErrorBody {
        detail: status.canonical_reason().unwrap_or("Error").to_string(),
    };
    (status, Json(body)).into_response()
}

/// Give the timeout middleware's empty 408 a `{"detail": ...}` body.
pub async fn timeout_detail(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        status_response(StatusCode::REQUEST_TIMEOUT)
    } else {
        response
    }
}
