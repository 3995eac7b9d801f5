//! Binary entry point for the multitool server.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use network_multitool::config::{self, MultitoolConfig};
use network_multitool::http::HttpServer;
use network_multitool::lifecycle::Shutdown;

/// Diagnostic HTTP server exposing host/network introspection endpoints.
#[derive(Debug, Parser)]
#[command(name = "network-multitool", version)]
struct Cli {
    /// Address to listen on.
    #[arg(long, value_name = "ADDR")]
    listen: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "network_multitool=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::load_config(path)?,
        None => MultitoolConfig::default(),
    };

    // Environment overrides are read once here, never from handlers.
    config::apply_env_overrides(&mut config);

    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }

    let errors = config::validate_config(&config);
    if !errors.is_empty() {
        for error in &errors {
            tracing::error!(error = %error, "Invalid configuration");
        }
        return Err("configuration validation failed".into());
    }

    tracing::info!(
        component = %config.identity.component,
        bind_address = %config.listener.bind_address,
        relay_timeout_secs = config.relay.timeout_secs,
        "Configuration loaded"
    );

    // Bind TCP listener; startup failure is fatal.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
