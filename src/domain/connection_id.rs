//! Type-safe connection identifier.
//!
//! [`ConnectionId`] wraps a [`uuid::Uuid`] (v4) minted by the WebSocket
//! layer when a connection is accepted. It is the value compared at
//! disconnect time to find which registry entries a closing connection
//! owned.

use std::fmt;

/// Unique identifier for one live WebSocket connection.
///
/// Stable for the connection's lifetime and never reused: a client that
/// reconnects gets a fresh id even if it registers the same display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(uuid::Uuid);

impl ConnectionId {
    /// Mints a new random `ConnectionId` (UUID v4).
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
