//! Server→client events of the handshake protocol.

use serde::Serialize;

use super::DisplayName;

/// Event pushed to one client over its WebSocket connection.
///
/// Serialized into the protocol envelope: kebab-case event name under
/// `"event"`, camelCase payload fields under `"data"`:
///
/// ```json
/// {"event": "qr-request", "data": {"scannerName": "bob"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum RelayEvent {
    /// Asks the owner's device to approve or decline a scanner's login
    /// attempt.
    #[serde(rename_all = "camelCase")]
    QrRequest {
        /// Display name of the scanner requesting to log in.
        scanner_name: DisplayName,
    },

    /// Reports the owner's decision back to the scanner.
    LoginStatus {
        /// Decision string, relayed verbatim. `"Accepted"` and `"Declined"`
        /// are the client convention; the relay does not validate the value.
        status: String,
    },
}
