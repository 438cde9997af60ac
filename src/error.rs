//! Relay error types.
//!
//! [`RelayError`] covers every failure the relay can observe. The handshake
//! protocol has no error channel, so no variant ever reaches a client: each
//! is absorbed where it occurs, logged, and reflected at most as a dropped
//! delivery.

use crate::domain::{ConnectionId, DisplayName};

/// Failures observed while routing handshake traffic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RelayError {
    /// No live connection currently holds the given display name.
    #[error("no live connection registered as \"{0}\"")]
    NameNotRegistered(DisplayName),

    /// A client supplied an empty display name.
    #[error("display name must not be empty")]
    EmptyDisplayName,

    /// The target connection's writer loop has shut down.
    #[error("connection {0} is gone")]
    PeerGone(ConnectionId),

    /// An inbound frame could not be decoded as a protocol event.
    #[error("malformed event: {0}")]
    MalformedEvent(String),
}
