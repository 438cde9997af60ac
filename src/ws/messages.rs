//! Client-to-relay wire events and their envelope codec.

use serde::Deserialize;

use crate::error::RelayError;

/// Event received from a client over its WebSocket connection.
///
/// Decoded from the protocol envelope: kebab-case event name under
/// `"event"`, payload under `"data"` with camelCase fields. `register`
/// carries its display name as a bare string payload:
///
/// ```json
/// {"event": "register", "data": "alice"}
/// {"event": "qr-scanned", "data": {"ownerName": "alice", "scannerName": "bob"}}
/// {"event": "login-response", "data": {"scannerName": "bob", "status": "Accepted"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// Binds a display name to the emitting connection.
    Register(String),

    /// A scanner read an owner's identity token and requests to log in.
    #[serde(rename_all = "camelCase")]
    QrScanned {
        /// Name shown on the owner's device.
        owner_name: String,
        /// Name of the scanning device.
        scanner_name: String,
    },

    /// The owner approved or declined a scanner's request.
    #[serde(rename_all = "camelCase")]
    LoginResponse {
        /// Name of the scanner the decision is for.
        scanner_name: String,
        /// Decision string, relayed downstream verbatim.
        status: String,
    },
}

impl ClientEvent {
    /// Decodes one text frame into a protocol event.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::MalformedEvent`] when the frame is not valid
    /// JSON, names an unknown event, or is missing a payload field.
    pub fn parse(frame: &str) -> Result<Self, RelayError> {
        serde_json::from_str(frame).map_err(|err| RelayError::MalformedEvent(err.to_string()))
    }
}
