//! Fibonacci API entry point.
//!
//! This is the main entry point for running the Fibonacci HTTP server.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fibonacci_api_common::ConfigFile;
use fibonacci_api_server::{FibonacciServer, ServerConfig};

/// HTTP service for exact Fibonacci number computation.
#[derive(Parser, Debug)]
#[command(name = "fibonacci-api", version)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, env = "FIBONACCI_API_CONFIG")]
    config: Option<PathBuf>,

    /// Address to listen on, overriding the config file (e.g. '0.0.0.0:8000')
    #[arg(long, env = "BIND_ADDR")]
    bind_addr: Option<SocketAddr>,

    /// Per-request timeout in seconds, overriding the config file
    #[arg(long, env = "REQUEST_TIMEOUT_SECS")]
    request_timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,fibonacci_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    info!("Starting Fibonacci API");

    // Load configuration
    let config_file = match &args.config {
        Some(path) => ConfigFile::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => ConfigFile::default(),
    };

    let mut server_config =
        ServerConfig::try_from(&config_file.server).context("Invalid [server] configuration")?;
    if let Some(addr) = args.bind_addr {
        server_config = server_config.with_bind_addr(addr);
    }
    if let Some(secs) = args.request_timeout_secs {
        server_config = server_config.with_timeout(secs);
    }

    info!(
        bind_addr = %server_config.bind_addr,
        request_timeout_secs = server_config.request_timeout_secs,
        max_index = config_file.api.limits.max_index,
        max_count = config_file.api.limits.max_count,
        "Configuration loaded"
    );

    // Create and run server
    let server = FibonacciServer::new(&config_file.api, server_config)?;

    info!("Server initialized. Available endpoints:");
    info!("  GET  /                            - API information");
    info!("  GET  /health                      - Health check");
    info!("  GET  /fibonacci/:n                - Compute the nth Fibonacci number");
    info!("  GET  /fibonacci/sequence/:count   - Compute the first count Fibonacci numbers");

    server.run().await?;

    Ok(())
}
