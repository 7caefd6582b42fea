//! Tree vertices and the insertion primitive.
//!
//! The tree is a radix tree (compressed trie) over pattern fragments. Static
//! nodes own literal bytes; siblings never share a first byte, so child access
//! is O(1) via the hash map. Param and wildcard children hang off dedicated
//! slots and own no bytes.
//!
//! Children are owned by their parent. There are no parent pointers: matching
//! keeps an explicit frame stack, and pruning unwinds its own descent.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::mem;

/// What a tree node matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A literal byte sequence.
    Static,
    /// One path segment, up to the next `/` (or everything, at a leaf).
    Param,
    /// All remaining input.
    Wildcard,
}

/// The pattern a node completes.
///
/// Pattern text and capture names are always set and cleared together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Terminal {
    /// The pattern exactly as registered.
    pub(crate) pattern: String,
    /// One name per param/wildcard node on the root-to-node path.
    pub(crate) names: Vec<String>,
}

/// Which child slot of a parent a node lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edge {
    Static(u8),
    Param,
    Wildcard,
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    /// Literal bytes. Empty for param and wildcard nodes.
    pub(crate) fragment: Vec<u8>,
    /// Static children indexed by the first byte of their fragment.
    pub(crate) static_children: HashMap<u8, Node>,
    pub(crate) param_child: Option<Box<Node>>,
    pub(crate) wildcard_child: Option<Box<Node>>,
    pub(crate) terminal: Option<Terminal>,
}

impl Default for Node {
    fn default() -> Self {
        Self::new(NodeKind::Static, Vec::new())
    }
}

impl Node {
    pub(crate) fn new(kind: NodeKind, fragment: Vec<u8>) -> Self {
        Self {
            kind,
            fragment,
            static_children: HashMap::new(),
            param_child: None,
            wildcard_child: None,
            terminal: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.static_children.is_empty() && self.param_child.is_none() && self.wildcard_child.is_none()
    }

    /// A childless node that completes no pattern.
    pub(crate) fn is_dead(&self) -> bool {
        self.is_leaf() && self.terminal.is_none()
    }

    /// An untouched root: no bytes, no children, no pattern.
    fn is_fresh(&self) -> bool {
        self.fragment.is_empty() && self.is_dead()
    }

    pub(crate) fn child(&self, edge: Edge) -> Option<&Node> {
        match edge {
            Edge::Static(label) => self.static_children.get(&label),
            Edge::Param => self.param_child.as_deref(),
            Edge::Wildcard => self.wildcard_child.as_deref(),
        }
    }

    pub(crate) fn child_mut(&mut self, edge: Edge) -> Option<&mut Node> {
        match edge {
            Edge::Static(label) => self.static_children.get_mut(&label),
            Edge::Param => self.param_child.as_deref_mut(),
            Edge::Wildcard => self.wildcard_child.as_deref_mut(),
        }
    }

    /// Drop the child in `edge`, along with its subtree.
    pub(crate) fn detach(&mut self, edge: Edge) {
        match edge {
            Edge::Static(label) => {
                self.static_children.remove(&label);
            }
            Edge::Param => self.param_child = None,
            Edge::Wildcard => self.wildcard_child = None,
        }
    }

    /// Insert `text` starting at this node's own fragment.
    ///
    /// Returns the node at which `text` ends exactly, splitting nodes so that
    /// such a node exists.
    pub(crate) fn insert_static(&mut self, text: &[u8]) -> &mut Node {
        if self.is_fresh() {
            self.fragment = text.to_vec();
            return self;
        }

        let lcp = common_prefix_len(text, &self.fragment);
        if lcp < self.fragment.len() {
            self.split(lcp);
        }
        self.insert_static_child(&text[lcp..])
    }

    /// Insert `text` below this node, among its static children.
    pub(crate) fn insert_static_child(&mut self, text: &[u8]) -> &mut Node {
        let Some(&label) = text.first() else {
            return self;
        };

        match self.static_children.entry(label) {
            Entry::Occupied(entry) => entry.into_mut().insert_static(text),
            Entry::Vacant(entry) => entry.insert(Node::new(NodeKind::Static, text.to_vec())),
        }
    }

    pub(crate) fn param_child_or_insert(&mut self) -> &mut Node {
        self.param_child
            .get_or_insert_with(|| Box::new(Node::new(NodeKind::Param, Vec::new())))
    }

    pub(crate) fn wildcard_child_or_insert(&mut self) -> &mut Node {
        self.wildcard_child
            .get_or_insert_with(|| Box::new(Node::new(NodeKind::Wildcard, Vec::new())))
    }

    /// Keep `fragment[..at]` here and move everything else into a new child.
    ///
    /// The child inherits the kind, the fragment suffix, the terminal and all
    /// children; this node becomes a plain static branch.
    fn split(&mut self, at: usize) {
        debug_assert_eq!(self.kind, NodeKind::Static, "only static nodes own bytes");

        let suffix = self.fragment.split_off(at);
        let label = suffix[0];
        let child = Node {
            kind: self.kind,
            fragment: suffix,
            static_children: mem::take(&mut self.static_children),
            param_child: self.param_child.take(),
            wildcard_child: self.wildcard_child.take(),
            terminal: self.terminal.take(),
        };

        self.kind = NodeKind::Static;
        self.static_children.insert(label, child);
    }

    /// Visit every terminal in priority order: static (by label), param, wildcard.
    pub(crate) fn for_each_terminal<'n>(&'n self, visit: &mut impl FnMut(&'n Terminal)) {
        if let Some(terminal) = &self.terminal {
            visit(terminal);
        }

        let mut labels: Vec<&u8> = self.static_children.keys().collect();
        labels.sort_unstable();
        for label in labels {
            self.static_children[label].for_each_terminal(visit);
        }
        if let Some(child) = &self.param_child {
            child.for_each_terminal(visit);
        }
        if let Some(child) = &self.wildcard_child {
            child.for_each_terminal(visit);
        }
    }
}

/// Length of the longest common prefix of two byte strings.
#[inline]
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
