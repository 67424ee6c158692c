//! # Router Service
//!
//! The single consumer task that turns hash-change events into published
//! [`RouteState`].
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       RouterService Event Loop                          │
//! │                                                                         │
//! │   navigate_to("/apps")                                                  │
//! │        │                                                                │
//! │        ▼ (hash side effect only - no resolution here)                   │
//! │   Location.set_hash("#/apps") ──► watch: hash changed                   │
//! │                                        │                                │
//! │   RouterHandle.refresh() ──► mpsc: Refresh command                      │
//! │                                        │                                │
//! │                              ┌─────────▼──────────┐                     │
//! │                              │  service task      │  ONE consumer:      │
//! │                              │  tokio::select! {} │  delivery order ==  │
//! │                              │  table.resolve()   │  resolution order   │
//! │                              └─────────┬──────────┘                     │
//! │                                        │                                │
//! │                                        ▼ watch: RouteState              │
//! │              views: state(), subscribe(), changed().await               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Resolution is synchronous inside the loop: each event fully completes
//! before the next is observed, so the published state always reflects the
//! most recently processed event.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use atlas_core::{link_to, RouteState, RouteTable};

use crate::error::{RouterError, RouterResult};
use crate::location::Location;

/// Depth of the command channel. Commands are tiny and the consumer drains
/// them synchronously; this never realistically fills.
const COMMAND_BUFFER: usize = 32;

// =============================================================================
// Commands
// =============================================================================

/// Commands that can be sent to the router service.
#[derive(Debug)]
pub enum RouterCommand {
    /// Re-resolve the current hash even though it did not change.
    Refresh,
    /// Stop the service task.
    Shutdown,
}

// =============================================================================
// Router Service
// =============================================================================

/// Owns the route table and the one writer of the published state.
pub struct RouterService {
    /// The immutable pattern → component table.
    table: RouteTable,

    /// Host location (hash storage + change notification).
    location: Arc<dyn Location>,

    /// State broadcaster. The service is the only writer.
    state_tx: watch::Sender<RouteState>,
}

/// Handle for interacting with a running router service.
///
/// Cheap to clone; every view layer gets one.
#[derive(Clone)]
pub struct RouterHandle {
    /// Command sender.
    cmd_tx: mpsc::Sender<RouterCommand>,

    /// Published state receiver.
    state_rx: watch::Receiver<RouteState>,

    /// Host location, for navigation side effects.
    location: Arc<dyn Location>,
}

impl RouterService {
    /// Creates a service over a table and a location. Nothing runs until
    /// [`start`](RouterService::start).
    pub fn new(table: RouteTable, location: Arc<dyn Location>) -> Self {
        let (state_tx, _) = watch::channel(RouteState::fallback());
        RouterService {
            table,
            location,
            state_tx,
        }
    }

    /// Starts the service and returns a handle.
    ///
    /// Performs one immediate resolution of the current hash *before* the
    /// event loop spawns, so `handle.state()` reflects the page's starting
    /// location right away - a deep link is live before any event fires.
    pub fn start(self) -> RouterHandle {
        // Subscribe before the initial resolution: a hash write landing in
        // between is then re-observed by the loop instead of lost
        let hash_rx = self.location.subscribe();

        let initial = self.table.resolve(&self.location.hash());
        info!(
            path = %initial.path,
            component = %initial.component,
            "Router service started"
        );
        self.state_tx.send_replace(initial);

        let (cmd_tx, cmd_rx) = mpsc::channel(COMMAND_BUFFER);
        let handle = RouterHandle {
            cmd_tx,
            state_rx: self.state_tx.subscribe(),
            location: self.location.clone(),
        };

        // Spawn the event loop
        tokio::spawn(async move {
            self.run(cmd_rx, hash_rx).await;
        });

        handle
    }

    /// Main event loop: hash changes and commands, one at a time.
    async fn run(
        self,
        mut cmd_rx: mpsc::Receiver<RouterCommand>,
        mut hash_rx: watch::Receiver<String>,
    ) {
        loop {
            tokio::select! {
                changed = hash_rx.changed() => {
                    match changed {
                        Ok(()) => self.resolve_current(),
                        Err(_) => {
                            warn!("Location closed - router service stopping");
                            break;
                        }
                    }
                }
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(RouterCommand::Refresh) => self.resolve_current(),
                        Some(RouterCommand::Shutdown) | None => {
                            info!("Router service shutting down");
                            break;
                        }
                    }
                }
            }
        }
    }

    /// Resolves the current hash and publishes the result.
    ///
    /// Total: any hash value produces a state, misses included.
    fn resolve_current(&self) {
        let state = self.table.resolve(&self.location.hash());
        debug!(
            path = %state.path,
            component = %state.component,
            "Route resolved"
        );
        self.state_tx.send_replace(state);
    }
}

impl RouterHandle {
    /// Returns a snapshot of the current route state.
    pub fn state(&self) -> RouteState {
        self.state_rx.borrow().clone()
    }

    /// Subscribes to state updates. The receiver always holds the latest
    /// published state.
    pub fn subscribe(&self) -> watch::Receiver<RouteState> {
        self.state_rx.clone()
    }

    /// Waits for the next state update and returns it.
    ///
    /// Errors when the service has stopped: a caller looping on this sees a
    /// closed channel instead of spinning on stale state forever.
    pub async fn changed(&mut self) -> RouterResult<RouteState> {
        self.state_rx
            .changed()
            .await
            .map_err(|_| RouterError::ChannelClosed("Router state channel closed".into()))?;
        Ok(self.state_rx.borrow().clone())
    }

    /// Navigates by setting the location hash to `#` + path, verbatim.
    ///
    /// ## Decoupling Contract
    /// This only writes the hash. The published state does not change until
    /// the service task observes the hash-change event - the same split a
    /// browser gives you between assigning `location.hash` and the
    /// `hashchange` listener running.
    pub fn navigate_to(&self, path: &str) {
        self.location.set_hash(&link_to(path));
    }

    /// Returns the raw location hash (including the `#` prefix).
    pub fn location_hash(&self) -> String {
        self.location.hash()
    }

    /// Forces re-resolution of the current hash.
    pub async fn refresh(&self) -> RouterResult<()> {
        self.cmd_tx
            .send(RouterCommand::Refresh)
            .await
            .map_err(|_| RouterError::ChannelClosed("Router service stopped".into()))
    }

    /// Stops the service task.
    pub async fn shutdown(&self) -> RouterResult<()> {
        self.cmd_tx
            .send(RouterCommand::Shutdown)
            .await
            .map_err(|_| RouterError::ChannelClosed("Router service stopped".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::MemoryLocation;
    use atlas_core::dashboard_table;

    fn start_router(location: Arc<MemoryLocation>) -> RouterHandle {
        RouterService::new(dashboard_table(), location).start()
    }

    #[tokio::test]
    async fn test_initial_resolution_of_empty_hash() {
        let handle = start_router(Arc::new(MemoryLocation::new()));
        let state = handle.state();
        assert_eq!(state.path, "/");
        assert_eq!(state.component, "dashboard-view");
    }

    #[tokio::test]
    async fn test_initial_resolution_of_deep_link() {
        let location = Arc::new(MemoryLocation::with_hash("#/projects/PRJ-001"));
        let handle = start_router(location);

        // Live before any event fires
        let state = handle.state();
        assert_eq!(state.path, "/projects/PRJ-001");
        assert_eq!(state.component, "project-detail");
        assert_eq!(state.param("id"), Some("PRJ-001"));
    }

    #[tokio::test]
    async fn test_navigate_is_decoupled_from_resolution() {
        let location = Arc::new(MemoryLocation::new());
        let mut handle = start_router(location.clone());

        handle.navigate_to("/apps");

        // Hash side effect is immediate...
        assert_eq!(handle.location_hash(), "#/apps");
        // ...but on this single-threaded runtime the service task has not
        // run yet, so the published state is still the starting one
        assert_eq!(handle.state().path, "/");

        let state = handle.changed().await.unwrap();
        assert_eq!(state.path, "/apps");
        assert_eq!(state.component, "app-list");
    }

    #[tokio::test]
    async fn test_navigate_with_params_and_query() {
        let mut handle = start_router(Arc::new(MemoryLocation::new()));

        handle.navigate_to("/vendors/VND-009?sort=name&filter=active");
        let state = handle.changed().await.unwrap();

        assert_eq!(state.component, "vendor-detail");
        assert_eq!(state.param("id"), Some("VND-009"));
        assert_eq!(state.query_param("sort"), Some("name"));
        assert_eq!(state.query_param("filter"), Some("active"));
    }

    #[tokio::test]
    async fn test_unknown_path_falls_back_without_touching_hash() {
        let mut handle = start_router(Arc::new(MemoryLocation::new()));

        handle.navigate_to("/nonexistent-page");
        let state = handle.changed().await.unwrap();

        assert_eq!(state.path, "/");
        assert_eq!(state.component, "dashboard-view");
        // The hash itself is left unchanged by the fallback
        assert_eq!(handle.location_hash(), "#/nonexistent-page");
    }

    #[tokio::test]
    async fn test_latest_navigation_wins() {
        let mut handle = start_router(Arc::new(MemoryLocation::new()));

        // Two writes before the service runs: the watch channel keeps only
        // the latest, which is exactly the ordering guarantee we publish
        handle.navigate_to("/domains");
        handle.navigate_to("/apps/APP-002");

        let state = handle.changed().await.unwrap();
        assert_eq!(state.path, "/apps/APP-002");
        assert_eq!(state.component, "app-detail");
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let location = Arc::new(MemoryLocation::with_hash("#/apps?filter=active"));
        let mut handle = start_router(location);

        let first = handle.state();
        handle.refresh().await.unwrap();
        let second = handle.changed().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(second.query.len(), 1);
    }

    #[tokio::test]
    async fn test_subscribers_see_updates() {
        let handle = start_router(Arc::new(MemoryLocation::new()));
        let mut sub_a = handle.subscribe();
        let mut sub_b = handle.subscribe();

        handle.navigate_to("/settings");

        sub_a.changed().await.unwrap();
        sub_b.changed().await.unwrap();
        assert_eq!(sub_a.borrow().component, "settings-view");
        assert_eq!(sub_b.borrow().component, "settings-view");
    }

    #[tokio::test]
    async fn test_shutdown_closes_command_channel() {
        let handle = start_router(Arc::new(MemoryLocation::new()));
        handle.shutdown().await.unwrap();

        // Let the service task drain the shutdown command
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert!(matches!(
            handle.refresh().await,
            Err(RouterError::ChannelClosed(_))
        ));
    }

    #[tokio::test]
    async fn test_changed_errors_after_shutdown() {
        let mut handle = start_router(Arc::new(MemoryLocation::new()));
        handle.shutdown().await.unwrap();

        // Once the service task exits it drops the state sender, so a
        // waiter observes the closed channel instead of stale state
        assert!(matches!(
            handle.changed().await,
            Err(RouterError::ChannelClosed(_))
        ));
    }

    #[tokio::test]
    async fn test_state_survives_handle_clones() {
        let mut handle = start_router(Arc::new(MemoryLocation::new()));
        let clone = handle.clone();

        handle.navigate_to("/roadmap");
        let state = handle.changed().await.unwrap();

        assert_eq!(state.component, "roadmap-view");
        assert_eq!(clone.state().component, "roadmap-view");
    }
}
