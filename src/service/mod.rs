//! Service layer: handshake protocol orchestration.
//!
//! [`HandshakeRouter`] implements the scan → decision → status flow over
//! the [`crate::domain::PresenceRegistry`].

pub mod handshake_router;

pub use handshake_router::{DeliveryOutcome, HandshakeRouter};
