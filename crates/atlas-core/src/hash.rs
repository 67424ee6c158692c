//! # Hash Fragment Parsing
//!
//! Splits a raw hash fragment into a normalized path and a query map, and
//! provides the pure [`link_to`] helper for templates.
//!
//! ## Fragment Anatomy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  "#/apps/APP-001?filter=active&sort=name"               │
//! │                                                                         │
//! │   "#"            ── optional prefix, stripped                          │
//! │   "/apps/APP-001"── path portion, normalized                           │
//! │   "?"            ── first '?' splits path from query                   │
//! │   "filter=active&sort=name" ── '&'-joined key=value pairs              │
//! │                                                                         │
//! │  Values are OPAQUE: no URL decoding, no type coercion. The view        │
//! │  that consumes a query value decides what it means.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Normalization Rules
//! - Empty fragment and bare `#` mean the root path `/`
//! - Trailing slashes are insignificant: `/apps/` is `/apps`
//! - Duplicate query keys: last occurrence wins
//! - A query pair without `=` binds the key to the empty string

use std::collections::HashMap;

/// Returns the hyperlink target for a path: `#` + path, verbatim.
///
/// Pure and total - no normalization, no validation. Templates call this to
/// build `href` values without forcing navigation.
///
/// ## Example
/// ```rust
/// use atlas_core::link_to;
///
/// assert_eq!(link_to("/apps"), "#/apps");
/// assert_eq!(link_to("/"), "#/");
/// ```
pub fn link_to(path: &str) -> String {
    format!("#{path}")
}

/// Splits a raw fragment into `(path portion, query portion)`.
///
/// Strips at most one leading `#`, then splits at the *first* `?`. Either
/// side may come back empty; the caller normalizes the path and parses the
/// query separately.
pub fn split_fragment(fragment: &str) -> (&str, Option<&str>) {
    let fragment = fragment.strip_prefix('#').unwrap_or(fragment);
    match fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (fragment, None),
    }
}

/// Normalizes a path portion.
///
/// - Empty input becomes `/`
/// - Trailing slashes are trimmed (`/apps///` → `/apps`), except that the
///   root itself stays `/`
///
/// Deliberately does NOT force a leading slash: a fragment like `#apps` is a
/// malformed link, and leaving it slash-less lets the table miss it and fall
/// back to the dashboard instead of silently rewriting it to `/apps`.
pub fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        return "/".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        // Input was all slashes - that is the root
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a query portion (`key=value` pairs joined by `&`) into a map.
///
/// ## Rules
/// - Values are taken verbatim - no URL decoding
/// - A pair without `=` yields an empty-string value
/// - Empty pairs (from `&&` or a trailing `&`) are skipped
/// - Duplicate keys: last occurrence wins
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for pair in query.split('&') {
        if pair.is_empty() {
            continue;
        }
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        // An empty key is still a key: "=x" binds "" to "x", exactly as
        // assigning query[""] does in the frontend original
        map.insert(key.to_string(), value.to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_to() {
        assert_eq!(link_to("/apps"), "#/apps");
        assert_eq!(link_to("/projects"), "#/projects");
        assert_eq!(link_to("/"), "#/");
        assert_eq!(link_to(""), "#");
        // Total: any string passes through with the prefix
        assert_eq!(link_to("no-slash?x=1"), "#no-slash?x=1");
    }

    #[test]
    fn test_split_fragment() {
        assert_eq!(split_fragment("#/apps"), ("/apps", None));
        assert_eq!(split_fragment("/apps"), ("/apps", None));
        assert_eq!(split_fragment("#/apps?a=1"), ("/apps", Some("a=1")));
        assert_eq!(split_fragment("#"), ("", None));
        assert_eq!(split_fragment(""), ("", None));
        // Only the FIRST '?' splits; later ones belong to the query
        assert_eq!(split_fragment("#/x?a=1?b=2"), ("/x", Some("a=1?b=2")));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path("/apps"), "/apps");
        assert_eq!(normalize_path("/apps/"), "/apps");
        assert_eq!(normalize_path("/apps///"), "/apps");
        // No leading-slash repair
        assert_eq!(normalize_path("apps"), "apps");
    }

    #[test]
    fn test_parse_query_basic() {
        let q = parse_query("filter=active&sort=name");
        assert_eq!(q["filter"], "active");
        assert_eq!(q["sort"], "name");
        assert_eq!(q.len(), 2);
    }

    #[test]
    fn test_parse_query_edge_cases() {
        // Bare key binds to empty string
        let q = parse_query("flag");
        assert_eq!(q["flag"], "");

        // Empty value after '='
        let q = parse_query("k=");
        assert_eq!(q["k"], "");

        // Duplicate keys: last wins
        let q = parse_query("k=1&k=2");
        assert_eq!(q["k"], "2");

        // Empty pairs from "&&" or a trailing "&" are skipped, not errors
        let q = parse_query("&&=x&a=1&");
        assert_eq!(q.len(), 2);
        assert_eq!(q["a"], "1");
        assert_eq!(q[""], "x");

        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_parse_query_empty_key_binds() {
        // "=x" is a pair whose key is the empty string
        let q = parse_query("=x");
        assert_eq!(q.get(""), Some(&"x".to_string()));
        assert_eq!(q.len(), 1);

        // "=" binds the empty key to the empty value
        let q = parse_query("=");
        assert_eq!(q.get(""), Some(&String::new()));
    }

    #[test]
    fn test_parse_query_values_are_verbatim() {
        // No URL decoding: percent escapes stay as-is
        let q = parse_query("name=a%20b");
        assert_eq!(q["name"], "a%20b");
    }
}
