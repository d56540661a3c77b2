//! PublishedItem conversion server.
//!
//! Serves `POST /convert/json-to-xml` plus health endpoints.

use clap::Parser;
use pubxml_convert::{PublishedItemConverter, XmlConverter};
use pubxml_rest::{ServerConfig, create_app_with_config, init_logging};
use tracing::{info, warn};

/// Starts the Axum HTTP server and runs until Ctrl+C.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping server");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let converter = XmlConverter::new();

    info!(
        port = config.port,
        host = %config.host,
        converter = converter.name(),
        max_body_size = config.max_body_size,
        "Starting PublishedItem conversion server"
    );

    let app = create_app_with_config(converter, config.clone());
    serve(app, &config).await
}
