//! Compressed trie node and its run-labelled edges

use crate::traverse::PrefixNode;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, VecDeque};

/// An edge in the compressed trie: a non-empty run of symbols and the node
/// it leads to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub(crate) struct Edge<S> {
    pub(crate) run: Vec<S>,
    pub(crate) node: ShortNode<S>,
}

/// A node in the compressed trie.
///
/// Children are keyed by the first symbol of their run, so at most one
/// sibling edge can start with any given symbol. Every non-terminal node
/// other than the root has at least two children; single-child chains exist
/// only below terminal nodes, which is what keeps the tree maximally
/// compressed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct ShortNode<S> {
    pub(crate) terminal: bool,
    pub(crate) children: BTreeMap<S, Edge<S>>,
}

impl<S> ShortNode<S> {
    pub(crate) fn new() -> Self {
        ShortNode {
            terminal: false,
            children: BTreeMap::new(),
        }
    }

    /// Number of nodes in this subtree, this node included.
    pub(crate) fn count(&self) -> usize {
        1 + self
            .children
            .values()
            .map(|edge| edge.node.count())
            .sum::<usize>()
    }
}

impl<S: Clone + Ord> ShortNode<S> {
    /// Insert the unconsumed suffix of a sequence below this node. Returns
    /// true if the sequence was not present before.
    ///
    /// The four divergence cases reduce to two moves: split the matched
    /// edge's run when the common prefix falls short of it, then recurse
    /// past the common prefix (an empty leftover marks the reached node
    /// terminal; a non-empty one attaches or descends as usual).
    pub(crate) fn insert_suffix(&mut self, suffix: &[S]) -> bool {
        if suffix.is_empty() {
            let fresh = !self.terminal;
            self.terminal = true;
            return fresh;
        }
        match self.children.entry(suffix[0].clone()) {
            Entry::Vacant(slot) => {
                // Disjoint remainder: one edge covers the whole suffix.
                let mut leaf = ShortNode::new();
                leaf.terminal = true;
                slot.insert(Edge {
                    run: suffix.to_vec(),
                    node: leaf,
                });
                true
            }
            Entry::Occupied(slot) => {
                let edge = slot.into_mut();
                let common = common_prefix_len(&edge.run, suffix);
                if common < edge.run.len() {
                    edge.split_at(common);
                }
                edge.node.insert_suffix(&suffix[common..])
            }
        }
    }
}

impl<S: Clone + Ord> Edge<S> {
    /// Split this edge's run at `at`: the edge keeps the head of the run and
    /// leads to a fresh intermediate node, with the old subtree re-attached
    /// below it under the run's tail. `at` must be in `1..run.len()`, so
    /// neither side of the split is ever a zero-length run.
    fn split_at(&mut self, at: usize) {
        debug_assert!(at >= 1 && at < self.run.len());
        let tail = self.run.split_off(at);
        let detached = std::mem::replace(&mut self.node, ShortNode::new());
        self.node.children.insert(
            tail[0].clone(),
            Edge {
                run: tail,
                node: detached,
            },
        );
    }
}

impl<S: Clone + Ord> PrefixNode<S> for ShortNode<S> {
    fn is_terminal(&self) -> bool {
        self.terminal
    }

    fn enqueue_children<'a>(&'a self, path: &[S], sink: &mut VecDeque<(Vec<S>, &'a Self)>) {
        for edge in self.children.values() {
            let mut next = Vec::with_capacity(path.len() + edge.run.len());
            next.extend_from_slice(path);
            next.extend_from_slice(&edge.run);
            sink.push_back((next, &edge.node));
        }
    }

    fn descend<'a>(&'a self, token: &[S]) -> Option<(&'a Self, Vec<S>)> {
        let mut node = self;
        let mut spelled = Vec::with_capacity(token.len());
        let mut rest = token;
        while !rest.is_empty() {
            let edge = node.children.get(&rest[0])?;
            let common = common_prefix_len(&edge.run, rest);
            if common < edge.run.len() && common < rest.len() {
                // Genuine divergence: no path spells the token.
                return None;
            }
            spelled.extend_from_slice(&edge.run);
            node = &edge.node;
            if common == rest.len() {
                // Token exhausted, possibly partway through the run; the
                // run's tail belongs to every sequence below this edge.
                break;
            }
            rest = &rest[common..];
        }
        Some((node, spelled))
    }
}

/// Length of the longest common prefix of two symbol slices.
pub(crate) fn common_prefix_len<S: PartialEq>(a: &[S], b: &[S]) -> usize {
    a.iter().zip(b.iter()).take_while(|(x, y)| x == y).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_of(node: &ShortNode<char>, first: char) -> String {
        node.children[&first].run.iter().collect()
    }

    #[test]
    fn common_prefix_len_cases() {
        assert_eq!(common_prefix_len(b"apple", b"application"), 4);
        assert_eq!(common_prefix_len(b"abc", b"abc"), 3);
        assert_eq!(common_prefix_len(b"abc", b"xyz"), 0);
        assert_eq!(common_prefix_len(b"", b"abc"), 0);
    }

    #[test]
    fn disjoint_suffix_costs_one_edge() {
        let mut root: ShortNode<char> = ShortNode::new();
        let word: Vec<char> = "a longish string".chars().collect();
        assert!(root.insert_suffix(&word));
        assert_eq!(root.count(), 2);
        assert_eq!(run_of(&root, 'a'), "a longish string");
        assert!(root.children[&'a'].node.terminal);
    }

    #[test]
    fn run_consumed_with_leftover_descends() {
        let mut root: ShortNode<char> = ShortNode::new();
        root.insert_suffix(&['a', 'b']);
        root.insert_suffix(&['a', 'b', 'c', 'd']);
        // "ab" edge kept intact, "cd" hangs below the terminal node.
        assert_eq!(root.count(), 3);
        assert_eq!(run_of(&root, 'a'), "ab");
        let ab = &root.children[&'a'].node;
        assert!(ab.terminal);
        assert_eq!(run_of(ab, 'c'), "cd");
    }

    #[test]
    fn exact_run_match_marks_terminal() {
        let mut root: ShortNode<char> = ShortNode::new();
        root.insert_suffix(&['a', 'b', 'c', 'd']);
        root.insert_suffix(&['a', 'b', 'c', 'd', 'e', 'f']);
        assert!(!root.insert_suffix(&['a', 'b', 'c', 'd']));
        let abcd = &root.children[&'a'].node;
        assert!(abcd.terminal);
        assert_eq!(root.count(), 3);
    }

    #[test]
    fn divergence_with_leftover_splits_into_two_edges() {
        let mut root: ShortNode<char> = ShortNode::new();
        root.insert_suffix(&"apple".chars().collect::<Vec<_>>());
        root.insert_suffix(&"application".chars().collect::<Vec<_>>());
        // Split at "appl": intermediate keeps "e" and "ication" below it.
        assert_eq!(root.count(), 4);
        assert_eq!(run_of(&root, 'a'), "appl");
        let appl = &root.children[&'a'].node;
        assert!(!appl.terminal);
        assert_eq!(run_of(appl, 'e'), "e");
        assert_eq!(run_of(appl, 'i'), "ication");
        assert!(appl.children[&'e'].node.terminal);
        assert!(appl.children[&'i'].node.terminal);
    }

    #[test]
    fn divergence_at_sequence_end_marks_the_split_node() {
        let mut root: ShortNode<char> = ShortNode::new();
        root.insert_suffix(&"application".chars().collect::<Vec<_>>());
        root.insert_suffix(&"app".chars().collect::<Vec<_>>());
        // The inserted suffix is exactly the common prefix: the new
        // intermediate node becomes terminal with a single child.
        assert_eq!(root.count(), 3);
        assert_eq!(run_of(&root, 'a'), "app");
        let app = &root.children[&'a'].node;
        assert!(app.terminal);
        assert_eq!(run_of(app, 'l'), "lication");
    }

    #[test]
    fn descend_stops_partway_through_a_run() {
        let mut root: ShortNode<char> = ShortNode::new();
        root.insert_suffix(&"apple".chars().collect::<Vec<_>>());

        let (node, spelled) = root.descend(&['a', 'p']).unwrap();
        assert!(node.terminal);
        assert_eq!(spelled.iter().collect::<String>(), "apple");
        assert!(root.descend(&['a', 'x']).is_none());
        assert!(root.descend(&"apples".chars().collect::<Vec<_>>()).is_none());
    }
}
