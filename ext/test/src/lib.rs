//! pathmatch-test: conformance fixtures for pathmatch
//!
//! Routing behavior is pinned down by YAML fixtures under `fixtures/`. Each
//! fixture registers a table, optionally removes some patterns, and then
//! checks which pattern (if any) every input resolves to and what it captured.
//!
//! # Example
//!
//! ```
//! use pathmatch::Matcher;
//! use pathmatch_test::captures;
//!
//! let matcher: Matcher = ["/users/:id"].into_iter().collect();
//! let found = matcher.lookup("/users/42").unwrap();
//! assert_eq!(found.captures, captures(&[("id", "42")]));
//! ```

use std::collections::HashMap;

#[cfg(feature = "fixtures")]
pub mod config_fixture;
#[cfg(feature = "fixtures")]
pub mod fixture;

/// Build an owned capture map from borrowed pairs.
#[must_use]
pub fn captures(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_owned(), (*value).to_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_builds_owned_map() {
        let map = captures(&[("foo", "1"), ("*", "a/b")]);
        assert_eq!(map.len(), 2);
        assert_eq!(map["*"], "a/b");
    }

    #[test]
    fn empty_captures() {
        assert!(captures(&[]).is_empty());
    }
}
