//! Uncompressed trie node

use crate::traverse::PrefixNode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};

/// A node in the uncompressed trie.
///
/// Each outgoing edge carries exactly one symbol; the edge symbol is the
/// child's key in the ordered map, so sibling edges are always distinct and
/// traversal order over children is deterministic.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct Node<S> {
    pub(crate) terminal: bool,
    pub(crate) children: BTreeMap<S, Node<S>>,
}

impl<S> Node<S> {
    pub(crate) fn new() -> Self {
        Node {
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn count(&self) -> usize {
        1 + self.children.values().map(Node::count).sum::<usize>()
    }
}

impl<S: Clone + Ord> PrefixNode<S> for Node<S> {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn enqueue_children<'a>(&'a self, path: &[S], sink: &mut VecDeque<(Vec<S>, &'a Self)>) {
        for (symbol, child) in &self.children {
            let mut next = Vec::with_capacity(path.len() + 1);
            next.extend_from_slice(path);
            next.push(symbol.clone());
            sink.push_back((next, child));
        }
    }

    fn descend<'a>(&'a self, token: &[S]) -> Option<(&'a Self, Vec<S>)> {
        let mut node = self;
        for symbol in token {
            node = node.children.get(symbol)?;
        }
        Some((node, token.to_vec()))
    }
}
