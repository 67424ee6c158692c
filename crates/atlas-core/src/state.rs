//! # Route State
//!
//! The resolved navigation state handed to the rendering layer.
//!
//! ## Where RouteState Flows
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      RouteState Consumers                               │
//! │                                                                         │
//! │  hash fragment ──► RouteTable::resolve ──► RouteState                  │
//! │                                               │                         │
//! │               ┌───────────────────────────────┼─────────────────┐      │
//! │               ▼                               ▼                 ▼       │
//! │        component: which view          params: entity id   query: view  │
//! │        to render ("app-detail")       lookup ("APP-001")  filters      │
//! │                                                                         │
//! │  ALL four fields come from ONE resolution pass - they are never        │
//! │  mixed across navigation events.                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{FALLBACK_COMPONENT, ROOT_PATH};

/// The fully resolved navigation state for one hash fragment.
///
/// ## Consistency Invariant
/// All four fields are produced by a single resolution pass over one hash
/// string. There is no state where `component` reflects an older hash than
/// `path` - [`RouteTable::resolve`](crate::RouteTable::resolve) builds the
/// whole record before anything observes it.
///
/// ## Design Decisions
/// - **Owned Strings**: the state outlives the hash it was parsed from and
///   crosses the frontend boundary as JSON.
/// - **HashMap values are verbatim**: parameter and query values pass through
///   unmodified (`APP-001` stays `APP-001`, `3` stays `3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RouteState {
    /// Normalized pathname. Always starts with `/`; `/` when the hash was
    /// empty or nothing matched.
    pub path: String,

    /// Identifier of the view component to render.
    pub component: String,

    /// Positional parameters bound by `:name` pattern segments.
    /// Empty for routes without parameters.
    pub params: HashMap<String, String>,

    /// Query-string key/value pairs from the fragment's `?...` portion.
    /// Empty when the fragment carries no query.
    pub query: HashMap<String, String>,
}

impl RouteState {
    /// The fallback state: root path, dashboard view, nothing bound.
    ///
    /// This is both the initial state before any navigation event and the
    /// state every unmatched hash resolves to (modulo `query`, which is
    /// recomputed even on a miss).
    pub fn fallback() -> Self {
        RouteState {
            path: ROOT_PATH.to_string(),
            component: FALLBACK_COMPONENT.to_string(),
            params: HashMap::new(),
            query: HashMap::new(),
        }
    }

    /// Returns a bound positional parameter, if present.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Returns a query value, if present.
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

impl Default for RouteState {
    fn default() -> Self {
        RouteState::fallback()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_fallback() {
        let state = RouteState::default();
        assert_eq!(state.path, "/");
        assert_eq!(state.component, "dashboard-view");
        assert!(state.params.is_empty());
        assert!(state.query.is_empty());
    }

    #[test]
    fn test_accessors() {
        let mut state = RouteState::fallback();
        state.params.insert("id".to_string(), "APP-001".to_string());
        state.query.insert("sort".to_string(), "name".to_string());

        assert_eq!(state.param("id"), Some("APP-001"));
        assert_eq!(state.param("missing"), None);
        assert_eq!(state.query_param("sort"), Some("name"));
        assert_eq!(state.query_param("filter"), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = RouteState::fallback();
        state.path = "/apps/APP-001".to_string();
        state.component = "app-detail".to_string();
        state.params.insert("id".to_string(), "APP-001".to_string());

        let json = serde_json::to_string(&state).unwrap();
        let back: RouteState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
