//! Relay configuration loaded from environment variables.
//!
//! Follows 12-factor style: settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::{Ipv4Addr, SocketAddr};

/// Top-level relay configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`]. The relay has a
/// single knob, the listening port: everything else (names, handshakes)
/// arrives over the wire.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the server to.
    pub listen_addr: SocketAddr,
}

impl RelayConfig {
    /// Port used when `PORT` is unset or unparsable.
    pub const DEFAULT_PORT: u16 = 4000;

    /// Loads configuration from environment variables.
    ///
    /// Reads `PORT` (default `4000`) and binds on all interfaces. Calls
    /// `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let port = parse_env("PORT", Self::DEFAULT_PORT);
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)),
        }
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
