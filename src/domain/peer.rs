//! Live connection handle stored in the presence registry.

use tokio::sync::mpsc;

use super::{ConnectionId, RelayEvent};
use crate::error::RelayError;

/// Sending half of a connection's outbound event channel.
///
/// The receiving half is owned by that connection's writer loop.
pub type EventSender = mpsc::UnboundedSender<RelayEvent>;

/// Registry-side reference to a live connection.
///
/// The transport layer owns the socket; the registry holds only this handle,
/// pairing the connection's id with a clone of its outbound channel. Clones
/// are cheap and all address the same connection.
#[derive(Debug, Clone)]
pub struct PeerHandle {
    id: ConnectionId,
    sender: EventSender,
}

impl PeerHandle {
    /// Creates a handle for the given connection and outbound channel.
    #[must_use]
    pub fn new(id: ConnectionId, sender: EventSender) -> Self {
        Self { id, sender }
    }

    /// Returns the id of the connection this handle addresses.
    #[must_use]
    pub fn id(&self) -> ConnectionId {
        self.id
    }

    /// Queues an event on the connection's outbound channel.
    ///
    /// Best-effort: the event is handed to the connection's writer loop, not
    /// awaited onto the socket.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::PeerGone`] if the writer loop has shut down.
    pub fn send(&self, event: RelayEvent) -> Result<(), RelayError> {
        self.sender
            .send(event)
            .map_err(|_| RelayError::PeerGone(self.id))
    }
}
