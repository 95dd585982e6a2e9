//! HTTP server implementation.
//!
//! This module provides the main [`FibonacciServer`] struct for running
//! the HTTP server.

use std::net::SocketAddr;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use fibonacci_api_common::{ApiConfig, ServerConfigFile, ServerError};

use crate::router::build_router;
use crate::state::AppState;

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server.
    pub bind_addr: SocketAddr,
    /// Request timeout in seconds.
    pub request_timeout_secs: u64,
    /// Enable graceful shutdown on SIGTERM/SIGINT.
    pub graceful_shutdown: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            request_timeout_secs: 30,
            graceful_shutdown: true,
        }
    }
}

impl ServerConfig {
    /// Override the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Override the per-request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Per-request timeout applied by the router.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl TryFrom<&ServerConfigFile> for ServerConfig {
    type Error = ServerError;

    fn try_from(file: &ServerConfigFile) -> Result<Self, Self::Error> {
        let bind_addr = file.bind_addr.parse().map_err(|e| {
            ServerError::invalid_config(format!("Invalid bind_addr '{}': {e}", file.bind_addr))
        })?;

        Ok(Self {
            bind_addr,
            request_timeout_secs: file.request_timeout_secs,
            graceful_shutdown: file.graceful_shutdown,
        })
    }
}

/// Fibonacci API HTTP server.
///
/// # Example
///
/// ```ignore
/// use fibonacci_api_server::{FibonacciServer, ServerConfig};
/// use fibonacci_api_common::ApiConfig;
///
/// let server = FibonacciServer::new(&ApiConfig::default(), ServerConfig::default())?;
/// server.run().await?;
/// ```
pub struct FibonacciServer {
    state: AppState,
    config: ServerConfig,
}

impl FibonacciServer {
    /// Fails if the calculator limits are invalid.
    pub fn new(api_config: &ApiConfig, server_config: ServerConfig) -> Result<Self, ServerError> {
        let state = AppState::new(api_config)?;

        Ok(Self {
            state,
            config: server_config,
        })
    }

    /// Serve requests until SIGINT/SIGTERM, or forever when graceful
    /// shutdown is disabled.
    pub async fn run(self) -> Result<(), ServerError> {
        let app = build_router(self.state, self.config.request_timeout());

        let listener = TcpListener::bind(&self.config.bind_addr)
            .await
            .map_err(|source| ServerError::Bind {
                addr: self.config.bind_addr,
                source,
            })?;

        info!(addr = %self.config.bind_addr, "Starting HTTP server");

        if self.config.graceful_shutdown {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
        } else {
            axum::serve(listener, app).await?;
        }

        info!("Server shutdown complete");
        Ok(())
    }

    /// Serve on an ephemeral loopback port in a background task.
    pub async fn start_test(api_config: &ApiConfig) -> Result<TestHandle, ServerError> {
        let state = AppState::new(api_config)?;
        let app = build_router(state, Duration::from_secs(30));

        let requested = SocketAddr::from(([127, 0, 0, 1], 0));
        let listener = TcpListener::bind(requested)
            .await
            .map_err(|source| ServerError::Bind {
                addr: requested,
                source,
            })?;

        let addr = listener.local_addr()?;

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        Ok(TestHandle {
            addr,
            shutdown_tx: Some(shutdown_tx),
            handle,
        })
    }
}

/// A server started by [`FibonacciServer::start_test`].
pub struct TestHandle {
    addr: SocketAddr,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
    handle: tokio::task::JoinHandle<Result<(), std::io::Error>>,
}

impl TestHandle {
    /// Base URL, e.g. `http://127.0.0.1:49152`.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stop accepting connections and wait for the server task.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
        let _ = self.handle.await;
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
