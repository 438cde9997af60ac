//! Handshake router: the protocol's three transitions over the registry.

use std::sync::Arc;

use crate::domain::{ConnectionId, DisplayName, PeerHandle, PresenceRegistry, RelayEvent};

/// Result of a fire-and-forget delivery attempt.
///
/// The protocol has no error channel, so a failed delivery is never reported
/// to a client. The outcome exists so callers can log or meter drops instead
/// of treating delivery as an unchecked side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The event was queued on the recipient's outbound channel.
    Delivered,
    /// The recipient was not registered, or its connection was gone.
    Dropped,
}

/// Routes handshake events between registered connections.
///
/// Stateless between events: every transition resolves display names against
/// the [`PresenceRegistry`] at the moment it runs, so a counterpart that
/// reconnected under the same name is picked up without replaying any
/// handshake state. There is no pending-scan table; correlation travels in
/// the message payloads.
#[derive(Debug, Clone)]
pub struct HandshakeRouter {
    registry: Arc<PresenceRegistry>,
}

impl HandshakeRouter {
    /// Creates a router over the given registry.
    #[must_use]
    pub fn new(registry: Arc<PresenceRegistry>) -> Self {
        Self { registry }
    }

    /// Returns a reference to the inner [`PresenceRegistry`].
    #[must_use]
    pub fn registry(&self) -> &Arc<PresenceRegistry> {
        &self.registry
    }

    /// Handles a `register` event: binds `name` to the emitting connection.
    ///
    /// Last writer wins. A different live connection holding the same name
    /// is evicted from the registry without being notified; the eviction is
    /// logged so the churn stays observable.
    pub async fn handle_register(&self, name: DisplayName, peer: PeerHandle) {
        let conn = peer.id();
        let displaced = self.registry.register(name.clone(), peer).await;
        match displaced {
            Some(previous) if previous.id() != conn => {
                tracing::warn!(
                    %name,
                    previous = %previous.id(),
                    %conn,
                    "name re-registered, evicting previous holder"
                );
            }
            _ => tracing::info!(%name, %conn, "user registered"),
        }
    }

    /// Handles a `qr-scanned` event emitted by a scanner's connection.
    ///
    /// Resolves `owner_name` freshly and forwards a `qr-request` carrying
    /// `scanner_name` to the owner's connection. The scanner itself need not
    /// be registered yet. When the owner is absent the request is dropped;
    /// the scanner hears nothing and is expected to time out on its own.
    pub async fn handle_scan(
        &self,
        owner_name: DisplayName,
        scanner_name: DisplayName,
    ) -> DeliveryOutcome {
        tracing::info!(
            owner = %owner_name,
            scanner = %scanner_name,
            "qr scanned, forwarding login request"
        );
        self.deliver(&owner_name, RelayEvent::QrRequest { scanner_name })
            .await
    }

    /// Handles a `login-response` event emitted by an owner's connection.
    ///
    /// Resolves `scanner_name` at decision time, not scan time: a scanner
    /// that disconnected and re-registered between the two steps still
    /// receives the decision on its new connection. `status` is relayed
    /// verbatim. When the scanner is absent the decision is dropped and the
    /// owner is not told.
    pub async fn handle_decision(
        &self,
        scanner_name: DisplayName,
        status: String,
    ) -> DeliveryOutcome {
        tracing::info!(scanner = %scanner_name, %status, "login decision received");
        self.deliver(&scanner_name, RelayEvent::LoginStatus { status })
            .await
    }

    /// Handles a transport-level disconnect, freeing every name the
    /// connection held.
    ///
    /// No counterpart of an in-flight handshake is notified; the other side
    /// times out client-side.
    pub async fn handle_disconnect(&self, conn: ConnectionId) -> Option<DisplayName> {
        let freed = self.registry.unregister_by_connection(conn).await;
        match &freed {
            Some(name) => tracing::info!(%name, %conn, "user disconnected"),
            None => tracing::info!(%conn, "unknown user disconnected"),
        }
        freed
    }

    /// Delivers `event` to whichever connection is registered as `name`
    /// right now.
    async fn deliver(&self, name: &DisplayName, event: RelayEvent) -> DeliveryOutcome {
        match self.registry.lookup(name).await {
            Ok(peer) => match peer.send(event) {
                Ok(()) => DeliveryOutcome::Delivered,
                Err(err) => {
                    tracing::debug!(%name, %err, "recipient connection gone, dropping event");
                    DeliveryOutcome::Dropped
                }
            },
            Err(err) => {
                tracing::info!(%name, %err, "recipient not present, dropping event");
                DeliveryOutcome::Dropped
            }
        }
    }
}
