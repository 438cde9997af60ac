//! WebSocket layer: upgrade handling, per-connection loop, wire codec.
//!
//! The endpoint at `/ws` carries the whole handshake protocol; the HTTP
//! surface exists only for introspection.

pub mod connection;
pub mod handler;
pub mod messages;
