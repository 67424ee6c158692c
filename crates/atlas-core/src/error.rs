//! # Error Types
//!
//! Pattern-construction errors for atlas-core.
//!
//! ## Error Philosophy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Kinds of Bad Input                             │
//! │                                                                         │
//! │  Bad route PATTERN (programmer error)                                  │
//! │  ├── "/apps/:"        - parameter with no name                         │
//! │  ├── "apps"           - missing leading slash                          │
//! │  └── "/x/:id/:id"     - duplicate parameter name                       │
//! │      → PatternError at table-construction time, BEFORE startup         │
//! │                                                                         │
//! │  Bad HASH (user / stale link)                                          │
//! │  ├── "#/no-such-page"                                                   │
//! │  ├── "#garbage?&&="                                                     │
//! │  └── ""                                                                 │
//! │      → NEVER an error. Resolution is total and degrades to the         │
//! │        dashboard fallback. See RouteTable::resolve.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending pattern text in every variant
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Result type for pattern and table construction.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors raised while parsing a route pattern into typed segments.
///
/// These only surface while *building* a [`RouteTable`](crate::RouteTable);
/// once a table exists, resolution against it cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// The pattern string was empty.
    #[error("Route pattern is empty")]
    Empty,

    /// The pattern did not start with `/`.
    ///
    /// Patterns are absolute by definition; a relative pattern could never
    /// match a normalized path.
    #[error("Route pattern {pattern:?} must start with '/'")]
    MissingLeadingSlash { pattern: String },

    /// A `:` segment had no name after the colon.
    #[error("Route pattern {pattern:?} has a parameter segment with no name")]
    EmptyParamName { pattern: String },

    /// The same parameter name appeared twice.
    ///
    /// Two bindings for one name would make `params` ambiguous.
    #[error("Route pattern {pattern:?} binds parameter {name:?} more than once")]
    DuplicateParam { pattern: String, name: String },

    /// A literal segment between two slashes was empty (e.g. `/apps//x`).
    ///
    /// Empty literals can never match: parameter segments require non-empty
    /// input and literal comparison against `""` would only match malformed
    /// paths that normalization already collapses.
    #[error("Route pattern {pattern:?} contains an empty segment")]
    EmptySegment { pattern: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatternError::MissingLeadingSlash {
            pattern: "apps".to_string(),
        };
        assert_eq!(format!("{}", err), "Route pattern \"apps\" must start with '/'");

        let err = PatternError::DuplicateParam {
            pattern: "/x/:id/:id".to_string(),
            name: "id".to_string(),
        };
        assert!(format!("{}", err).contains("more than once"));
    }
}
