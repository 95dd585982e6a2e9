//! HTTP router configuration.
//!
//! This module provides functions to build the Axum router with all
//! necessary routes and middleware.

use std::time::Duration;

use axum::Router;
use axum::middleware::map_response;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handler::{fibonacci_number, fibonacci_sequence, health_check, not_found, root};
use crate::response::timeout_detail;
use crate::state::AppState;

/// Build the main application router.
///
/// Routes:
/// - `GET /` - API information
/// - `GET /health` - Health check
/// - `GET /fibonacci/:n` - Compute the nth Fibonacci number
/// - `GET /fibonacci/sequence/:count` - Compute the first `count` Fibonacci numbers
///
/// Unknown routes return 404 with `{"detail": "Not Found"}`, and requests
/// exceeding `request_timeout` return 408 with `{"detail": "Request Timeout"}`.
pub fn build_router(state: AppState, request_timeout: Duration) -> Router {
    let fibonacci_routes = Router::new()
        .route("/fibonacci/:n", get(fibonacci_number))
        .route("/fibonacci/sequence/:count", get(fibonacci_sequence));

    let info_routes = Router::new()
        .route("/", get(root))
        .route("/health", get(health_check));

    Router::new()
        .merge(fibonacci_routes)
        .merge(info_routes)
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(map_response(timeout_detail))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
