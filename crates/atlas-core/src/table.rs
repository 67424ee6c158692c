//! # Route Table
//!
//! The ordered pattern → component table and the total resolution function.
//!
//! ## Resolution Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  RouteTable::resolve(hash fragment)                     │
//! │                                                                         │
//! │  "#/apps/APP-001?tab=x"                                                 │
//! │        │                                                                │
//! │        ▼ split_fragment                                                 │
//! │  path "/apps/APP-001"          query "tab=x"                            │
//! │        │                           │                                    │
//! │        ▼ normalize_path            ▼ parse_query (ALWAYS computed)      │
//! │  "/apps/APP-001"               {tab: "x"}                               │
//! │        │                                                                │
//! │        ▼ first pattern that matches, in declaration order               │
//! │  ┌───────────────┐   miss   ┌─────────────────────────────────┐         │
//! │  │ MATCH         │          │ NO MATCH (not an error!)        │         │
//! │  │ path, params, │          │ path "/", fallback component,   │         │
//! │  │ component set │          │ params empty, query still set   │         │
//! │  └───────────────┘          └─────────────────────────────────┘         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The table is built once at startup through [`RouteTableBuilder`] and is
//! immutable afterwards. Declaration order is the only ambiguity rule.

use crate::error::PatternResult;
use crate::hash::{normalize_path, parse_query, split_fragment};
use crate::pattern::RoutePattern;
use crate::state::RouteState;
use crate::FALLBACK_COMPONENT;

/// One entry of the route table: a parsed pattern and the component it
/// selects.
#[derive(Debug, Clone)]
pub struct Route {
    /// The parsed path template.
    pub pattern: RoutePattern,

    /// Identifier of the view component rendered on a match.
    pub component: String,
}

/// An ordered, immutable collection of routes with a fallback component.
///
/// ## Ordering Contract
/// Matching is strictly first-match-wins in declaration order. There is no
/// specificity scoring: if `/apps/:id` should lose to `/apps/new`, declare
/// `/apps/new` first.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    fallback: String,
}

impl RouteTable {
    /// Starts building a table.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Resolves a raw hash fragment into a [`RouteState`].
    ///
    /// ## Totality Guarantee
    /// This function accepts *any* string and never fails: unknown paths,
    /// relative paths, garbage query strings, and the empty string all come
    /// back as well-formed states. Misses resolve to the fallback component
    /// at path `/`; the query map is recomputed regardless of the match
    /// outcome.
    ///
    /// ## Example
    /// ```rust
    /// use atlas_core::dashboard_table;
    ///
    /// let table = dashboard_table();
    /// assert_eq!(table.resolve("#/vendors/VND-009").params["id"], "VND-009");
    /// assert_eq!(table.resolve("total garbage").component, "dashboard-view");
    /// ```
    pub fn resolve(&self, fragment: &str) -> RouteState {
        let (path_part, query_part) = split_fragment(fragment);
        let path = normalize_path(path_part);
        let query = parse_query(query_part.unwrap_or(""));

        for route in &self.routes {
            if let Some(params) = route.pattern.matches(&path) {
                return RouteState {
                    path,
                    component: route.component.clone(),
                    params,
                    query,
                };
            }
        }

        // Miss: degrade to the dashboard, keep the query
        let mut state = RouteState::fallback();
        state.component = self.fallback.clone();
        state.query = query;
        state
    }

    /// The routes in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// The component rendered when nothing matches.
    pub fn fallback_component(&self) -> &str {
        &self.fallback
    }

    /// Number of routes in the table.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True when the table has no routes (everything falls back).
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Builder for [`RouteTable`].
///
/// Collects raw `(pattern, component)` pairs and parses them all in
/// [`build`](RouteTableBuilder::build), so a typo in any pattern surfaces as
/// one typed error at startup instead of a dead route at click time.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<(String, String)>,
    fallback: Option<String>,
}

impl RouteTableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        RouteTableBuilder::default()
    }

    /// Appends a route. Declaration order is match order.
    pub fn route(mut self, pattern: &str, component: &str) -> Self {
        self.entries.push((pattern.to_string(), component.to_string()));
        self
    }

    /// Overrides the fallback component (defaults to `dashboard-view`).
    pub fn fallback(mut self, component: &str) -> Self {
        self.fallback = Some(component.to_string());
        self
    }

    /// Parses every pattern and produces the immutable table.
    pub fn build(self) -> PatternResult<RouteTable> {
        let mut routes = Vec::with_capacity(self.entries.len());
        for (pattern, component) in self.entries {
            routes.push(Route {
                pattern: RoutePattern::parse(&pattern)?,
                component,
            });
        }
        Ok(RouteTable {
            routes,
            fallback: self
                .fallback
                .unwrap_or_else(|| FALLBACK_COMPONENT.to_string()),
        })
    }
}
