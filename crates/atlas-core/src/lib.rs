//! # atlas-core: Pure Routing Logic for the Atlas Dashboard
//!
//! This crate is the **heart** of Atlas navigation. It turns a URL hash
//! fragment into a fully resolved [`RouteState`] as a pure function with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Atlas Navigation Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Dashboard Views (frontend)                  │   │
//! │  │    App List ──► App Detail ──► Project Heatmap ──► Settings    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ reads RouteState                       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    atlas-router (service)                       │   │
//! │  │    hash-change events ──► resolve ──► publish via watch        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ atlas-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   hash    │  │  pattern  │  │   table   │  │   state   │  │   │
//! │  │   │  parsing  │  │  matching │  │  resolve  │  │RouteState │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • NO GLOBALS • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`] - The resolved [`RouteState`] record
//! - [`pattern`] - Typed route patterns (literal and `:name` segments)
//! - [`table`] - Ordered route table, builder, and resolution
//! - [`hash`] - Hash-fragment and query-string parsing, [`link_to`]
//! - [`dashboard`] - The static route table of the Atlas dashboard
//! - [`error`] - Pattern-construction errors
//!
//! ## Design Principles
//!
//! 1. **Total Resolution**: `RouteTable::resolve` never fails for any input
//!    string. Unknown or malformed hashes degrade to the dashboard fallback.
//! 2. **No Globals**: the route table and route state are owned values;
//!    sharing and mutation live in `atlas-router`, not here.
//! 3. **Typed Patterns**: patterns are parsed once into literal/parameter
//!    segments and matched by explicit comparison - no regex, no reflection.
//! 4. **Explicit Errors**: the only fallible operation is building a route
//!    table from a malformed pattern, and that is a typed error.
//!
//! ## Example Usage
//!
//! ```rust
//! use atlas_core::{dashboard_table, link_to};
//!
//! let table = dashboard_table();
//!
//! let state = table.resolve("#/apps/APP-001?tab=interfaces");
//! assert_eq!(state.path, "/apps/APP-001");
//! assert_eq!(state.component, "app-detail");
//! assert_eq!(state.params["id"], "APP-001");
//! assert_eq!(state.query["tab"], "interfaces");
//!
//! // Broken links degrade to the dashboard, never to an error
//! let state = table.resolve("#/no-such-page");
//! assert_eq!(state.component, "dashboard-view");
//! assert_eq!(state.path, "/");
//!
//! // Hyperlink targets for templates
//! assert_eq!(link_to("/apps"), "#/apps");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod dashboard;
pub mod error;
pub mod hash;
pub mod pattern;
pub mod state;
pub mod table;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use atlas_core::RouteTable` instead of
// `use atlas_core::table::RouteTable`

pub use dashboard::dashboard_table;
pub use error::PatternError;
pub use hash::link_to;
pub use pattern::RoutePattern;
pub use state::RouteState;
pub use table::{Route, RouteTable, RouteTableBuilder};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Component identifier rendered when no route matches.
///
/// ## Why a constant?
/// The fallback policy is deliberate: a stale or mistyped link degrades to a
/// known-good screen instead of a dead UI. Every consumer (table defaults,
/// state defaults, tests) refers to this one name.
pub const FALLBACK_COMPONENT: &str = "dashboard-view";

/// The normalized root path.
///
/// An empty hash, a bare `#`, and `#/` all resolve to this path.
pub const ROOT_PATH: &str = "/";
