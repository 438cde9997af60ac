//! Domain layer: connection identity, display names, and the presence
//! registry.
//!
//! This module contains everything the handshake router needs to address
//! live connections; no transport types appear here. The registry is the
//! relay's only shared mutable state.

pub mod connection_id;
pub mod display_name;
pub mod peer;
pub mod presence_registry;
pub mod relay_event;

pub use connection_id::ConnectionId;
pub use display_name::DisplayName;
pub use peer::{EventSender, PeerHandle};
pub use presence_registry::PresenceRegistry;
pub use relay_event::RelayEvent;
