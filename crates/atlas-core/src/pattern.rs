//! # Route Patterns
//!
//! Typed path templates with literal and `:name` parameter segments.
//!
//! ## Matching Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Segment-by-Segment Matching                          │
//! │                                                                         │
//! │  Pattern  "/apps/:id"      ──parse──►  [Literal("apps"), Param("id")]  │
//! │                                                                         │
//! │  Path     "/apps/APP-001"  ──split──►  ["apps", "APP-001"]             │
//! │                                            │        │                   │
//! │                              exact match ──┘        └── binds id        │
//! │                                                                         │
//! │  RULES                                                                  │
//! │  • Segment counts must be EQUAL ("/apps" never matches "/apps/:id")    │
//! │  • Literals compare exactly (case-sensitive)                           │
//! │  • Parameters match any single NON-EMPTY segment, value verbatim       │
//! │  • No backtracking, no wildcards, no nesting                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Patterns are parsed once at table-construction time; matching afterwards
//! is a straight zip over two segment lists. No regex, no reflection.

use std::collections::HashMap;
use std::fmt;

use crate::error::{PatternError, PatternResult};
use crate::hash::normalize_path;

/// One segment of a parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Must equal the path segment exactly.
    Literal(String),

    /// Matches any single non-empty path segment and binds it by name.
    Param(String),
}

/// A parsed, validated route pattern.
///
/// ## Construction
/// Only [`RoutePattern::parse`] builds one, so an existing pattern is always
/// well-formed: absolute, no empty segments, no duplicate parameter names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    /// Original pattern text, kept for diagnostics and `Display`.
    raw: String,

    /// Parsed segments in path order. Empty for the root pattern `/`.
    segments: Vec<Segment>,
}

impl RoutePattern {
    /// Parses a pattern string into typed segments.
    ///
    /// ## Rules
    /// - Must be non-empty and start with `/`
    /// - `:name` segments must have a non-empty name, unique per pattern
    /// - Interior empty segments (`/apps//x`) are rejected
    /// - Trailing slashes are insignificant, mirroring path normalization
    ///
    /// ## Example
    /// ```rust
    /// use atlas_core::RoutePattern;
    ///
    /// let p = RoutePattern::parse("/apps/:id").unwrap();
    /// assert_eq!(p.param_names(), vec!["id"]);
    ///
    /// assert!(RoutePattern::parse("apps").is_err());
    /// assert!(RoutePattern::parse("/x/:").is_err());
    /// ```
    pub fn parse(pattern: &str) -> PatternResult<Self> {
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        if !pattern.starts_with('/') {
            return Err(PatternError::MissingLeadingSlash {
                pattern: pattern.to_string(),
            });
        }

        // "/" and "/foo///" reduce the same way paths do
        let normalized = normalize_path(pattern);
        let mut segments = Vec::new();
        let mut seen_params: Vec<&str> = Vec::new();

        // Skip the empty piece before the leading '/'
        for piece in normalized.split('/').skip(1) {
            if piece.is_empty() {
                // Root pattern "/" has no pieces at all after the skip;
                // an empty piece here means an interior "//"
                if normalized == "/" {
                    break;
                }
                return Err(PatternError::EmptySegment {
                    pattern: pattern.to_string(),
                });
            }
            if let Some(name) = piece.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName {
                        pattern: pattern.to_string(),
                    });
                }
                if seen_params.contains(&name) {
                    return Err(PatternError::DuplicateParam {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                seen_params.push(name);
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Literal(piece.to_string()));
            }
        }

        Ok(RoutePattern {
            raw: pattern.to_string(),
            segments,
        })
    }

    /// Matches a *normalized* path against this pattern.
    ///
    /// Returns the bound parameters on a match (empty map for parameterless
    /// patterns), or `None` when the path does not fit. Never fails.
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        // Relative paths can never match an absolute pattern
        let rest = path.strip_prefix('/')?;

        // Root: zero pattern segments match exactly the bare "/"
        if self.segments.is_empty() {
            return rest.is_empty().then(HashMap::new);
        }
        if rest.is_empty() {
            return None;
        }

        let pieces: Vec<&str> = rest.split('/').collect();
        if pieces.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, piece) in self.segments.iter().zip(&pieces) {
            match segment {
                Segment::Literal(lit) => {
                    if lit != piece {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if piece.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*piece).to_string());
                }
            }
        }
        Some(params)
    }

    /// The parameter names this pattern binds, in path order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// The original pattern text.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
