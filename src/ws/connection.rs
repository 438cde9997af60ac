//! WebSocket connection state machine.
//!
//! Handles the read/write loop for a single WebSocket connection,
//! dispatching incoming protocol events to the router and forwarding
//! events other connections route here.

use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;

use super::messages::ClientEvent;
use crate::domain::{ConnectionId, DisplayName, PeerHandle, RelayEvent};
use crate::service::HandshakeRouter;

/// Runs the read/write loop for a single WebSocket connection.
///
/// - Reads protocol events from the client and dispatches them to the
///   [`HandshakeRouter`].
/// - Forwards [`RelayEvent`]s queued on this connection's outbound channel
///   to the socket.
///
/// The loop always ends by unregistering the connection, whichever side
/// closed first.
pub async fn run_connection(socket: WebSocket, router: Arc<HandshakeRouter>) {
    let conn = ConnectionId::new();
    let (mut ws_tx, mut ws_rx) = socket.split();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<RelayEvent>();
    let peer = PeerHandle::new(conn, event_tx);

    tracing::info!(%conn, "client connected");

    loop {
        tokio::select! {
            // Incoming frame from the client
            msg = ws_rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        dispatch_frame(&text, &peer, &router).await;
                    }
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    _ => {}
                }
            }
            // Event routed to this connection
            event = event_rx.recv() => {
                let Some(event) = event else { break };
                let json = serde_json::to_string(&event).unwrap_or_default();
                if ws_tx.send(Message::text(json)).await.is_err() {
                    break;
                }
            }
        }
    }

    let _ = router.handle_disconnect(conn).await;
    tracing::debug!(%conn, "ws connection closed");
}

/// Decodes one text frame and hands the event to the router.
///
/// Malformed frames and empty names are logged and ignored. The protocol
/// has no error channel, so nothing is sent back to the client.
async fn dispatch_frame(frame: &str, peer: &PeerHandle, router: &HandshakeRouter) {
    let event = match ClientEvent::parse(frame) {
        Ok(event) => event,
        Err(err) => {
            tracing::warn!(conn = %peer.id(), %err, "ignoring undecodable frame");
            return;
        }
    };

    match event {
        ClientEvent::Register(raw) => match DisplayName::new(raw) {
            Ok(name) => router.handle_register(name, peer.clone()).await,
            Err(err) => tracing::warn!(conn = %peer.id(), %err, "ignoring register"),
        },
        ClientEvent::QrScanned {
            owner_name,
            scanner_name,
        } => match (DisplayName::new(owner_name), DisplayName::new(scanner_name)) {
            (Ok(owner), Ok(scanner)) => {
                let _ = router.handle_scan(owner, scanner).await;
            }
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(conn = %peer.id(), %err, "ignoring qr-scanned");
            }
        },
        ClientEvent::LoginResponse {
            scanner_name,
            status,
        } => match DisplayName::new(scanner_name) {
            Ok(scanner) => {
                let _ = router.handle_decision(scanner, status).await;
            }
            Err(err) => tracing::warn!(conn = %peer.id(), %err, "ignoring login-response"),
        },
    }
}
