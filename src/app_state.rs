//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::HandshakeRouter;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Handshake router owning the presence registry.
    pub router: Arc<HandshakeRouter>,
}
