//! Pattern removal.
//!
//! Removal first locates the pattern's node by replaying its decomposition
//! against the tree (no nodes are created), then clears the terminal marker
//! and detaches every node the removal left childless and non-terminal.

use crate::node::{Edge, Node};
use crate::pattern::{decompose, Segment};

/// The child edges leading from `root` to the node that completes `pattern`.
///
/// `None` when the pattern is not registered.
pub(crate) fn locate(root: &Node, pattern: &str) -> Option<Vec<Edge>> {
    let decomposed = decompose(pattern);
    let mut edges = Vec::new();
    let mut node = root;

    for (index, segment) in decomposed.segments.iter().enumerate() {
        match segment {
            Segment::Static(text) => {
                let mut text = text.as_bytes();
                if index == 0 {
                    text = text.strip_prefix(node.fragment.as_slice())?;
                }
                while let Some(&label) = text.first() {
                    let edge = Edge::Static(label);
                    let child = node.child(edge)?;
                    text = text.strip_prefix(child.fragment.as_slice())?;
                    edges.push(edge);
                    node = child;
                }
            }
            Segment::Param(_) => {
                node = node.child(Edge::Param)?;
                edges.push(Edge::Param);
            }
            Segment::Wildcard => {
                node = node.child(Edge::Wildcard)?;
                edges.push(Edge::Wildcard);
            }
        }
    }

    let terminal = node.terminal.as_ref()?;
    (terminal.pattern == pattern).then_some(edges)
}

/// Clear the terminal at the end of `edges` and prune dead nodes on the way back.
///
/// Returns whether `node` itself is dead afterwards.
pub(crate) fn clear(node: &mut Node, edges: &[Edge]) -> bool {
    match edges.split_first() {
        None => node.terminal = None,
        Some((&edge, rest)) => {
            let child_dead = node.child_mut(edge).is_some_and(|child| clear(child, rest));
            if child_dead {
                node.detach(edge);
            }
        }
    }
    node.is_dead()
}
