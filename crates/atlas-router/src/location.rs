//! # Location Abstraction
//!
//! The host environment's hash storage and change notification, behind a
//! trait.
//!
//! ## Why a Trait?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Location Implementations                           │
//! │                                                                         │
//! │  MemoryLocation (here)          WebviewLocation (frontend shell)       │
//! │  ──────────────────────         ────────────────────────────────       │
//! │  watch channel holds hash       window.location.hash via IPC           │
//! │  set_hash → change event        hashchange → change event              │
//! │  used by the service AND        same trait, same service loop          │
//! │  as the test double                                                    │
//! │                                                                         │
//! │  The router service never knows which one it is driving.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notification Semantics
//! Setting the hash to its *current* value does not emit a change event,
//! matching how browsers treat `location.hash` assignments. The service's
//! explicit refresh command covers forced re-resolution.

use tokio::sync::watch;

/// Hash storage with change notification.
///
/// Implementations must be cheap to read: the service calls
/// [`hash`](Location::hash) on every change event.
pub trait Location: Send + Sync {
    /// Returns the current hash fragment (including any leading `#`).
    fn hash(&self) -> String;

    /// Sets the hash fragment, emitting a change notification if the value
    /// actually changed.
    fn set_hash(&self, hash: &str);

    /// Subscribes to hash-change notifications. The receiver yields the new
    /// hash value; only the latest value is retained.
    fn subscribe(&self) -> watch::Receiver<String>;
}

/// In-process [`Location`] backed by a `watch` channel.
///
/// The channel doubles as the storage: its current value IS the hash. This
/// is the implementation used in tests and in headless embeddings of the
/// dashboard.
#[derive(Debug)]
pub struct MemoryLocation {
    hash_tx: watch::Sender<String>,
}

impl MemoryLocation {
    /// Creates a location with an empty hash (the page's starting state).
    pub fn new() -> Self {
        let (hash_tx, _) = watch::channel(String::new());
        MemoryLocation { hash_tx }
    }

    /// Creates a location already pointing at the given hash, for processes
    /// that start on a deep link.
    pub fn with_hash(hash: &str) -> Self {
        let (hash_tx, _) = watch::channel(hash.to_string());
        MemoryLocation { hash_tx }
    }
}

impl Default for MemoryLocation {
    fn default() -> Self {
        MemoryLocation::new()
    }
}

impl Location for MemoryLocation {
    fn hash(&self) -> String {
        self.hash_tx.borrow().clone()
    }

    fn set_hash(&self, hash: &str) {
        // send_if_modified: identical assignments emit no event, like the
        // browser's hashchange
        self.hash_tx.send_if_modified(|current| {
            if current == hash {
                false
            } else {
                *current = hash.to_string();
                true
            }
        });
    }

    fn subscribe(&self) -> watch::Receiver<String> {
        self.hash_tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let loc = MemoryLocation::new();
        assert_eq!(loc.hash(), "");
    }

    #[test]
    fn test_with_hash() {
        let loc = MemoryLocation::with_hash("#/apps");
        assert_eq!(loc.hash(), "#/apps");
    }

    #[tokio::test]
    async fn test_set_hash_notifies() {
        let loc = MemoryLocation::new();
        let mut rx = loc.subscribe();

        loc.set_hash("#/apps");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "#/apps");
        assert_eq!(loc.hash(), "#/apps");
    }

    #[tokio::test]
    async fn test_identical_assignment_is_silent() {
        let loc = MemoryLocation::with_hash("#/apps");
        let mut rx = loc.subscribe();

        loc.set_hash("#/apps");
        // No event pending: has_changed stays false
        assert!(!rx.has_changed().unwrap());

        loc.set_hash("#/domains");
        assert!(rx.has_changed().unwrap());
    }
}
