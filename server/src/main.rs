//! Echo Relay Server - Main Entry Point

use anyhow::{Context, Result};
use tracing::{info, warn};

use relay_server::{api, config, graph::GraphClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relay_server=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting Echo Relay Server"
    );

    if !config.has_tokens() {
        warn!("WEBHOOK_VERIFY_TOKEN or GRAPH_API_TOKEN is empty; handshake or replies will fail");
    }

    let graph = GraphClient::new(&config).context("Failed to build Graph API client")?;
    let bind_address = config.bind_address();

    // Build router
    let app = api::create_router(api::AppState::new(config, graph));

    // Start server
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    info!(address = %bind_address, "Server is listening");

    // Graceful shutdown handler
    let shutdown_signal = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for CTRL+C: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Received shutdown signal, cleaning up...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await?;

    info!("Server shutdown complete");

    Ok(())
}
