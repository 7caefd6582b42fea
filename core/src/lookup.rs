//! Backtracking lookup.
//!
//! Walks the tree against an input, trying children in priority order
//! (static, then param, then wildcard). When a branch dead-ends the walk pops
//! back to the nearest ancestor with an untried alternative, restoring the
//! input it consumed and the value it captured.
//!
//! The walk is an explicit frame stack, so its depth is bounded by the tree
//! depth and no parent links are needed.

use crate::node::{Node, NodeKind, Terminal};
use crate::Match;

const SEPARATOR: u8 = b'/';

/// The next child slot to try at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Alternative {
    Static,
    Param,
    Wildcard,
    Exhausted,
}

impl Alternative {
    fn following(self) -> Self {
        match self {
            Self::Static => Self::Param,
            Self::Param => Self::Wildcard,
            Self::Wildcard | Self::Exhausted => Self::Exhausted,
        }
    }
}

struct Frame<'t> {
    node: &'t Node,
    /// Input bytes this node consumed on entry.
    consumed: usize,
    next: Alternative,
}

/// Receives walk events. Every method defaults to a no-op.
pub(crate) trait Observer {
    /// `node` was entered, consuming `consumed`.
    fn enter(&mut self, _node: &Node, _consumed: &[u8]) {}
    /// `node`'s fragment did not match the remaining input.
    fn reject(&mut self, _node: &Node) {}
    /// `node` ran out of alternatives; `restored` bytes went back to the input.
    fn backtrack(&mut self, _node: &Node, _restored: usize) {}
}

impl Observer for () {}

/// Find the most specific pattern under `root` matching `input`.
pub(crate) fn walk<'t>(
    root: &'t Node,
    input: &str,
    observer: &mut impl Observer,
) -> Option<Match<'t>> {
    let bytes = input.as_bytes();
    if !bytes.starts_with(&root.fragment) {
        observer.reject(root);
        return None;
    }

    let mut pos = root.fragment.len();
    observer.enter(root, &bytes[..pos]);
    if pos == bytes.len() {
        if let Some(terminal) = &root.terminal {
            return Some(finish(terminal, &[]));
        }
    }

    let mut captures: Vec<&str> = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        consumed: pos,
        next: Alternative::Static,
    }];

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let alternative = frame.next;
        frame.next = alternative.following();
        let rest = &bytes[pos..];

        let entered = match alternative {
            Alternative::Static => match rest.first().and_then(|b| node.static_children.get(b)) {
                Some(child) if rest.starts_with(&child.fragment) => {
                    Some((child, child.fragment.len()))
                }
                Some(child) => {
                    observer.reject(child);
                    None
                }
                None => None,
            },
            Alternative::Param => match node.param_child.as_deref() {
                Some(child) if !rest.is_empty() => {
                    // A trailing parameter has nothing after it to delimit it.
                    let len = if child.is_leaf() {
                        rest.len()
                    } else {
                        rest.iter()
                            .position(|&b| b == SEPARATOR)
                            .unwrap_or(rest.len())
                    };
                    Some((child, len))
                }
                _ => None,
            },
            Alternative::Wildcard => node.wildcard_child.as_deref().map(|child| (child, rest.len())),
            Alternative::Exhausted => {
                if let Some(frame) = stack.pop() {
                    pos -= frame.consumed;
                    if frame.node.kind != NodeKind::Static {
                        captures.pop();
                    }
                    observer.backtrack(frame.node, frame.consumed);
                }
                continue;
            }
        };

        let Some((child, len)) = entered else {
            continue;
        };

        if child.kind != NodeKind::Static {
            // Param and wildcard children only hang where a literal segment of
            // the pattern ended, so `pos` is on a char boundary here.
            captures.push(&input[pos..pos + len]);
        }
        observer.enter(child, &rest[..len]);
        pos += len;

        if pos == bytes.len() {
            if let Some(terminal) = &child.terminal {
                return Some(finish(terminal, &captures));
            }
        }

        stack.push(Frame {
            node: child,
            consumed: len,
            next: Alternative::Static,
        });
    }

    None
}

fn finish<'t>(terminal: &'t Terminal, captures: &[&str]) -> Match<'t> {
    debug_assert_eq!(
        terminal.names.len(),
        captures.len(),
        "capture names out of step with captured values for {:?}",
        terminal.pattern
    );

    Match {
        pattern: &terminal.pattern,
        captures: terminal
            .names
            .iter()
            .zip(captures)
            .map(|(name, value)| (name.clone(), (*value).to_owned()))
            .collect(),
    }
}
