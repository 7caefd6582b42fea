//! pathmatch - path-pattern routing table
//!
//! Registers patterns made of literal text, named parameters (`:name`) and a
//! trailing wildcard (`*`), stores them in a compressed prefix tree, and
//! resolves concrete paths to the single most specific pattern together with
//! the values its parameters captured.
//!
//! # Architecture
//!
//! - [`Matcher`]: the routing table (`add`, `lookup`, `remove`)
//! - [`Match`]: a lookup result, the pattern plus its captures
//! - [`MatchTrace`]: a lookup with every step of the walk recorded
//! - [`TableConfig`]: serializable table, validated on build
//!
//! # Key Design Insights
//!
//! 1. **Priority**: at every node static children are tried before the
//!    parameter child, which is tried before the wildcard child.
//!
//! 2. **Backtracking**: a branch that dead-ends hands its input and capture
//!    back and the walk resumes at the nearest untried alternative. The walk
//!    uses an explicit frame stack, never parent pointers.
//!
//! 3. **Trailing parameters are greedy**: a parameter with nothing registered
//!    after it captures the rest of the input, `/` included.
//!
//! # Pattern grammar
//!
//! | Syntax | Meaning |
//! |--------|---------|
//! | `text` | literal bytes, compared exactly |
//! | `\:` | a literal `:` |
//! | `:name` | one segment, up to the next `/` |
//! | `*` | the rest of the input, captured as `"*"`; ends the pattern |
//!
//! # Example
//!
//! ```
//! use pathmatch::prelude::*;
//!
//! let mut matcher = Matcher::new();
//! matcher.add("/params/:foo/bar/:qux");
//!
//! let found = matcher.lookup("/params/1/bar/2").unwrap();
//! assert_eq!(found.pattern, "/params/:foo/bar/:qux");
//! assert_eq!(found.captures["foo"], "1");
//! assert_eq!(found.captures["qux"], "2");
//!
//! assert!(matcher.remove("/params/:foo/bar/:qux"));
//! assert!(matcher.lookup("/params/1/bar/2").is_none());
//! ```

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod config;
mod lookup;
mod matcher;
mod node;
mod pattern;
mod prune;
mod trace;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use config::TableConfig;
pub use matcher::{Match, Matcher};
pub use node::NodeKind;
pub use trace::{MatchTrace, TraceStep};

use std::collections::HashMap;

/// Match `input` against a single pattern.
///
/// Builds a throwaway one-pattern tree. Returns the captures when that
/// pattern matches, `None` otherwise.
///
/// ```
/// let captures = pathmatch::match_pattern("/static/*", "/static/any").unwrap();
/// assert_eq!(captures["*"], "any");
///
/// assert!(pathmatch::match_pattern("/params/:foo", "/other/1").is_none());
/// ```
#[must_use]
pub fn match_pattern(pattern: &str, input: &str) -> Option<HashMap<String, String>> {
    let mut matcher = Matcher::new();
    matcher.add(pattern);
    let found = matcher.lookup(input)?;
    (found.pattern == pattern).then_some(found.captures)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use pathmatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        match_pattern, Match, MatchTrace, Matcher, MatcherError, NodeKind, TableConfig,
        TraceStep,
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum number of patterns accepted from a [`TableConfig`].
pub const MAX_PATTERNS: usize = 65_536;

/// Maximum byte length of a pattern accepted from a [`TableConfig`].
pub const MAX_PATTERN_LENGTH: usize = 8192;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from building a table out of configuration.
///
/// The tree operations themselves never fail; these are caught at config load
/// time. Fix the configuration and build again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// More patterns than [`MAX_PATTERNS`].
    #[error("table has {count} patterns, but maximum allowed is {max}")]
    TooManyPatterns {
        /// Actual number of patterns.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },
    /// A pattern longer than [`MAX_PATTERN_LENGTH`].
    #[error("pattern length is {len}, but maximum allowed is {max}")]
    PatternTooLong {
        /// Actual length of the pattern.
        len: usize,
        /// Maximum allowed length.
        max: usize,
    },
    /// A `*` followed by more text, which the tree would silently drop.
    #[error("pattern \"{pattern}\" has text after its wildcard; `*` must be the last character")]
    TextAfterWildcard {
        /// The offending pattern.
        pattern: String,
    },
}
