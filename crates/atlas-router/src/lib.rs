//! # atlas-router: Reactive Navigation State
//!
//! Owns the live [`RouteState`] of the Atlas dashboard. A single service
//! task listens for hash-change notifications from a [`Location`], resolves
//! them through the pure `atlas-core` table, and publishes the result over a
//! `tokio::sync::watch` channel that any number of views can subscribe to.
//!
//! ## Why a Service Task Instead of a Global?
//!
//! The browser original kept one mutable `router` object and mutated it from
//! a `hashchange` listener. Here the same single-writer/multi-reader shape
//! is explicit:
//!
//! 1. **Owned State**: the `watch::Sender` is the one writer; views hold
//!    receivers, not references to a global.
//! 2. **Explicit Channel**: hash changes arrive as messages on a channel the
//!    service drains in order - delivery order is resolution order.
//! 3. **Decoupled Navigation**: [`RouterHandle::navigate_to`] only writes the
//!    hash; the state updates when the service observes the change, exactly
//!    like assigning `location.hash` in a browser.
//!
//! ## Modules
//!
//! - [`location`] - The [`Location`] trait and in-process [`MemoryLocation`]
//! - [`service`] - [`RouterService`], [`RouterHandle`], the event loop
//! - [`error`] - Channel errors
//!
//! ## Example
//!
//! ```rust
//! use atlas_core::dashboard_table;
//! use atlas_router::{MemoryLocation, RouterService};
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let location = Arc::new(MemoryLocation::new());
//! let handle = RouterService::new(dashboard_table(), location).start();
//!
//! // Starting resolves the current (empty) hash immediately
//! assert_eq!(handle.state().component, "dashboard-view");
//!
//! let mut updates = handle.subscribe();
//! handle.navigate_to("/apps/APP-001");
//! updates.changed().await.unwrap();
//! assert_eq!(updates.borrow().params["id"], "APP-001");
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod location;
pub mod service;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{RouterError, RouterResult};
pub use location::{Location, MemoryLocation};
pub use service::{RouterHandle, RouterService};

// Consumers almost always need these alongside the handle
pub use atlas_core::{link_to, RouteState, RouteTable};
