//! System endpoints: health check and presence introspection.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::app_state::AppState;
use crate::domain::DisplayName;

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    timestamp: String,
    version: String,
}

/// `GET /health` — Service health status.
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// Presence snapshot response.
#[derive(Debug, Serialize)]
struct PresenceResponse {
    count: usize,
    names: Vec<String>,
}

/// `GET /presence` — Display names currently registered on the relay.
///
/// Introspection only: names are self-asserted and carry no credentials, so
/// listing them reveals nothing a connected client could not learn by being
/// named in a handshake.
pub async fn presence_handler(State(state): State<AppState>) -> impl IntoResponse {
    let names: Vec<String> = state
        .router
        .registry()
        .names()
        .await
        .into_iter()
        .map(DisplayName::into_string)
        .collect();

    (
        StatusCode::OK,
        Json(PresenceResponse {
            count: names.len(),
            names,
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/presence", get(presence_handler))
}
