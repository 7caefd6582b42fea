//! Lookup trace types for debugging matcher behavior.
//!
//! A trace records the decision path of one lookup: every node entered,
//! every static child whose fragment failed to match, and every backtrack.
//! Use [`Matcher::lookup_with_trace()`](crate::Matcher::lookup_with_trace)
//! to get one.
//!
//! # Example
//!
//! ```
//! use pathmatch::{Matcher, TraceStep};
//!
//! let matcher: Matcher = ["/users/:id", "/users/me/settings"].into_iter().collect();
//! let trace = matcher.lookup_with_trace("/users/me");
//!
//! assert_eq!(trace.result.map(|m| m.pattern), Some("/users/:id"));
//! assert!(trace
//!     .steps
//!     .iter()
//!     .any(|step| matches!(step, TraceStep::Reject { .. })));
//! ```

use std::fmt;

use crate::lookup::Observer;
use crate::node::{Node, NodeKind};
use crate::Match;

/// One event in a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceStep {
    /// A node was entered.
    Enter {
        /// Kind of the node entered.
        kind: NodeKind,
        /// Input consumed on entry: the fragment for static nodes, the
        /// captured value for param and wildcard nodes.
        consumed: String,
    },
    /// A static node's fragment did not match the remaining input.
    Reject {
        /// The fragment that failed to match.
        fragment: String,
    },
    /// A node ran out of alternatives and the walk moved back to its parent.
    Backtrack {
        /// Kind of the node abandoned.
        kind: NodeKind,
        /// Input bytes handed back.
        restored: usize,
    },
}

impl fmt::Display for TraceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter { kind, consumed } => write!(f, "enter {kind:?} {consumed:?}"),
            Self::Reject { fragment } => write!(f, "reject {fragment:?}"),
            Self::Backtrack { kind, restored } => {
                write!(f, "backtrack {kind:?} (restored {restored} bytes)")
            }
        }
    }
}

/// Trace of a full lookup.
///
/// # INV: `result` == `lookup()` result
///
/// The `result` field always equals what [`Matcher::lookup()`](crate::Matcher::lookup)
/// returns for the same input.
#[derive(Debug, Clone)]
pub struct MatchTrace<'t> {
    /// The final result (identical to what `lookup()` returns).
    pub result: Option<Match<'t>>,
    /// Every step of the walk, in order.
    pub steps: Vec<TraceStep>,
}

impl MatchTrace<'_> {
    /// Number of times the walk backtracked.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, TraceStep::Backtrack { .. }))
            .count()
    }
}

impl Observer for Vec<TraceStep> {
    fn enter(&mut self, node: &Node, consumed: &[u8]) {
        self.push(TraceStep::Enter {
            kind: node.kind,
            consumed: String::from_utf8_lossy(consumed).into_owned(),
        });
    }

    fn reject(&mut self, node: &Node) {
        self.push(TraceStep::Reject {
            fragment: String::from_utf8_lossy(&node.fragment).into_owned(),
        });
    }

    fn backtrack(&mut self, node: &Node, restored: usize) {
        self.push(TraceStep::Backtrack {
            kind: node.kind,
            restored,
        });
    }
}
