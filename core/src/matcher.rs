//! Matcher: the routing table.
//!
//! Owns the pattern tree and exposes the three operations on it: register a
//! pattern ([`add`](Matcher::add)), resolve an input
//! ([`lookup`](Matcher::lookup)) and retire a pattern
//! ([`remove`](Matcher::remove)).

use std::collections::HashMap;

use crate::lookup;
use crate::node::{Node, Terminal};
use crate::pattern::{decompose, Segment};
use crate::prune;
use crate::trace::MatchTrace;

/// A compressed prefix tree of path patterns.
///
/// Patterns mix literal text, named parameters (`:name`, one path segment)
/// and a trailing wildcard (`*`, the rest of the input). A lookup returns the
/// single most specific pattern for an input: static fragments beat
/// parameters, parameters beat wildcards, and the walk backtracks when a
/// more specific branch leads nowhere.
///
/// # Concurrency
///
/// `lookup` takes `&self`; `add` and `remove` take `&mut self`. Build the
/// table, then share it (e.g. behind an `Arc`) for concurrent lookups, or
/// guard it with an `RwLock` if it must change while serving.
///
/// # Example
///
/// ```
/// use pathmatch::Matcher;
///
/// let mut matcher = Matcher::new();
/// matcher.add("/users/:id");
/// matcher.add("/users/me");
/// matcher.add("/static/*");
///
/// let found = matcher.lookup("/users/42").unwrap();
/// assert_eq!(found.pattern, "/users/:id");
/// assert_eq!(found.captures["id"], "42");
///
/// assert_eq!(matcher.lookup("/users/me").unwrap().pattern, "/users/me");
/// assert_eq!(matcher.lookup("/static/css/app.css").unwrap().captures["*"], "css/app.css");
/// assert!(matcher.lookup("/other").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Matcher {
    pub(crate) root: Node,
    len: usize,
}

/// A successful lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match<'t> {
    /// The registered pattern, exactly as it was added.
    pub pattern: &'t str,
    /// Captured values keyed by parameter name (`"*"` for the wildcard).
    pub captures: HashMap<String, String>,
}

impl Matcher {
    /// Create an empty matcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pattern.
    ///
    /// Never fails: any string is a structurally valid pattern. Adding a
    /// pattern that ends at an already-terminal node replaces it, so re-adding
    /// an identical pattern is a no-op. Text after a `*` is ignored.
    pub fn add(&mut self, pattern: &str) {
        let decomposed = decompose(pattern);
        if !decomposed.ignored.is_empty() {
            tracing::warn!(
                pattern,
                ignored = decomposed.ignored,
                "text after wildcard is ignored"
            );
        }

        let names = decomposed.capture_names();
        let mut node = &mut self.root;
        for (index, segment) in decomposed.segments.iter().enumerate() {
            node = match segment {
                Segment::Static(text) if index == 0 => node.insert_static(text.as_bytes()),
                Segment::Static(text) => node.insert_static_child(text.as_bytes()),
                Segment::Param(_) => node.param_child_or_insert(),
                Segment::Wildcard => node.wildcard_child_or_insert(),
            };
        }

        let previous = node.terminal.replace(Terminal {
            pattern: pattern.to_owned(),
            names,
        });
        match previous {
            None => self.len += 1,
            Some(previous) if previous.pattern != pattern => {
                tracing::debug!(pattern, replaced = %previous.pattern, "pattern replaced");
            }
            Some(_) => {}
        }
        tracing::debug!(pattern, "pattern added");
    }

    /// Find the registered pattern that best matches `input`.
    ///
    /// Returns `None` when no pattern matches.
    #[must_use]
    pub fn lookup(&self, input: &str) -> Option<Match<'_>> {
        lookup::walk(&self.root, input, &mut ())
    }

    /// Same as [`lookup`](Self::lookup), recording every step of the walk.
    #[must_use]
    pub fn lookup_with_trace(&self, input: &str) -> MatchTrace<'_> {
        let mut steps = Vec::new();
        let result = lookup::walk(&self.root, input, &mut steps);
        MatchTrace { result, steps }
    }

    /// Remove a pattern, pruning any branch left without patterns.
    ///
    /// Returns `false` if the pattern was not registered.
    pub fn remove(&mut self, pattern: &str) -> bool {
        let Some(edges) = prune::locate(&self.root, pattern) else {
            return false;
        };

        if prune::clear(&mut self.root, &edges) {
            // Back to an empty tree.
            self.root.fragment.clear();
        }
        self.len -= 1;
        tracing::debug!(pattern, "pattern removed");
        true
    }

    /// Whether exactly this pattern is registered.
    #[must_use]
    pub fn contains(&self, pattern: &str) -> bool {
        prune::locate(&self.root, pattern).is_some()
    }

    /// Number of registered patterns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no pattern is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// All registered patterns, in lookup priority order.
    #[must_use]
    pub fn patterns(&self) -> Vec<&str> {
        let mut patterns = Vec::with_capacity(self.len);
        self.root
            .for_each_terminal(&mut |terminal| patterns.push(terminal.pattern.as_str()));
        patterns
    }
}

impl<'a> FromIterator<&'a str> for Matcher {
    fn from_iter<I: IntoIterator<Item = &'a str>>(patterns: I) -> Self {
        let mut matcher = Self::new();
        matcher.extend(patterns);
        matcher
    }
}

impl<'a> Extend<&'a str> for Matcher {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, patterns: I) {
        for pattern in patterns {
            self.add(pattern);
        }
    }
}

impl FromIterator<String> for Matcher {
    fn from_iter<I: IntoIterator<Item = String>>(patterns: I) -> Self {
        let mut matcher = Self::new();
        for pattern in patterns {
            matcher.add(&pattern);
        }
        matcher
    }
}
