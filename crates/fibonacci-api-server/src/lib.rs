//! HTTP Server for fibonacci-api.
//!
//! This crate exposes the calculator over HTTP. It handles:
//!
//! - HTTP request routing
//! - Path parameter parsing
//! - Mapping calculator errors to `{"detail": ...}` responses
//! - Health checks and graceful shutdown
//!
//! # Quick Start
//!
//! ```ignore
//! use fibonacci_api_server::{FibonacciServer, ServerConfig};
//! use fibonacci_api_common::ApiConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_config = ApiConfig::default();
//!     let server_config = ServerConfig::default();
//!
//!     let server = FibonacciServer::new(&api_config, server_config)?;
//!     server.run().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod handler;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod state;

pub use server::{FibonacciServer, ServerConfig, TestHandle};
pub use state::AppState;
