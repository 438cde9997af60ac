//! qrlink-relay server entry point.
//!
//! Starts the Axum server with the WebSocket relay and introspection
//! endpoints.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use qrlink_relay::app_state::AppState;
use qrlink_relay::build_app;
use qrlink_relay::config::RelayConfig;
use qrlink_relay::domain::PresenceRegistry;
use qrlink_relay::service::HandshakeRouter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = RelayConfig::from_env();
    tracing::info!(addr = %config.listen_addr, "starting qrlink-relay");

    // Build domain and service layers
    let registry = Arc::new(PresenceRegistry::new());
    let router = Arc::new(HandshakeRouter::new(registry));

    // Build application
    let app = build_app(AppState { router });

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "relay listening");

    axum::serve(listener, app).await?;

    Ok(())
}
