//! Concurrent presence store mapping display names to live connections.
//!
//! [`PresenceRegistry`] is the only shared mutable state in the relay. A
//! single `tokio::sync::RwLock<HashMap>` serializes mutations; readers clone
//! the [`PeerHandle`] out so no lock is held while a message is delivered.

use std::collections::HashMap;

use tokio::sync::RwLock;

use super::{ConnectionId, DisplayName, PeerHandle};
use crate::error::RelayError;

/// Central store of currently registered display names.
///
/// # Concurrency
///
/// - `register` and `unregister_by_connection` take the write lock, so
///   mutations are serialized and never observed half-applied.
/// - `lookup` and the introspection reads take the read lock and observe the
///   last completed write for any given name.
/// - Registrations of distinct names do not interfere beyond lock contention.
#[derive(Debug, Default)]
pub struct PresenceRegistry {
    entries: RwLock<HashMap<DisplayName, PeerHandle>>,
}

impl PresenceRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `peer` under `name`, superseding any current holder.
    ///
    /// Always succeeds; a later registration of the same name wins. Returns
    /// the displaced handle if the name was already held, so the caller can
    /// log the eviction. A connection that registers a second name keeps both
    /// entries live until it disconnects.
    pub async fn register(&self, name: DisplayName, peer: PeerHandle) -> Option<PeerHandle> {
        self.entries.write().await.insert(name, peer)
    }

    /// Resolves `name` to the connection currently holding it.
    ///
    /// # Errors
    ///
    /// Returns [`RelayError::NameNotRegistered`] if no live connection holds
    /// `name`.
    pub async fn lookup(&self, name: &DisplayName) -> Result<PeerHandle, RelayError> {
        self.entries
            .read()
            .await
            .get(name)
            .cloned()
            .ok_or_else(|| RelayError::NameNotRegistered(name.clone()))
    }

    /// Removes every entry owned by `conn`, returning the last freed name.
    ///
    /// Entries registered by `conn` but since superseded by another
    /// connection are left untouched. Returns `None` when the connection
    /// owned no entry; that is a no-op, not an error.
    pub async fn unregister_by_connection(&self, conn: ConnectionId) -> Option<DisplayName> {
        let mut map = self.entries.write().await;
        let mut freed = None;
        map.retain(|name, peer| {
            if peer.id() == conn {
                freed = Some(name.clone());
                false
            } else {
                true
            }
        });
        freed
    }

    /// Returns the currently registered names, sorted for stable output.
    pub async fn names(&self) -> Vec<DisplayName> {
        let mut names: Vec<DisplayName> = self.entries.read().await.keys().cloned().collect();
        names.sort_unstable_by(|a, b| a.as_str().cmp(b.as_str()));
        names
    }

    /// Returns the number of registered names.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns `true` if no name is registered.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
