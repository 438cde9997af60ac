//! REST layer: router composition for the introspection endpoints.
//!
//! The protocol itself lives on the WebSocket endpoint; HTTP only exposes
//! `/health` and `/presence`.

pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Builds the complete REST router.
pub fn build_router() -> Router<AppState> {
    system::routes()
}
