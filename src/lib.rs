//! # qrlink-relay
//!
//! WebSocket signaling relay for QR-code login handshakes.
//!
//! An "owner" device displaying an identity token and a "scanner" device
//! that reads it complete a three-step, human-approved login handshake
//! through this relay. The relay routes intent between two named live
//! connections and lets the owner's side approve or decline; it never
//! authenticates credentials itself.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket, HTTP)
//!     │
//!     ├── WS layer (ws/)
//!     ├── REST introspection (api/)
//!     │
//!     ├── HandshakeRouter (service/)
//!     │
//!     └── PresenceRegistry (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
pub mod ws;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::ws::handler::ws_handler;

/// Builds the complete relay application: introspection endpoints plus the
/// `/ws` protocol endpoint, with request tracing and permissive CORS.
///
/// Factored out of `main` so integration tests boot the identical app on an
/// ephemeral port.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(api::build_router())
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
