//! Path-compressed prefix tree operations

use super::node::ShortNode;
use crate::traverse::{AutoComplete, BreadthFirst, Iter};
use serde::{Deserialize, Serialize};

/// A path-compressed prefix tree over symbol sequences.
///
/// Same operation contract as [`crate::Trie`], traded against a different
/// cost profile: a sequence sharing no prefix with existing content costs a
/// single edge rather than one node per symbol, and long unbranching shared
/// prefixes collapse into one run.
///
/// ```
/// use seqtrie::ShortTrie;
///
/// let mut trie = ShortTrie::new();
/// trie.insert("apple".chars());
/// trie.insert("application".chars());
///
/// // Root, the "appl" fork, and two leaves: far fewer than 16 nodes.
/// assert_eq!(trie.node_count(), 4);
/// let hits: Vec<String> = trie.auto_complete("app".chars(), 8).collect();
/// assert_eq!(hits.len(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct ShortTrie<S> {
    root: ShortNode<S>,
    len: usize,
}

impl<S> ShortTrie<S> {
    /// Create an empty trie.
    pub fn new() -> Self {
        ShortTrie {
            root: ShortNode::new(),
            len: 0,
        }
    }

    /// Number of distinct sequences inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total node count, the root included. Grows only at forks and
    /// sequence ends, never per symbol.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl<S: Clone + Ord> ShortTrie<S> {
    /// Insert a sequence, splitting an existing run in place when the
    /// sequence diverges partway through it. Idempotent.
    pub fn insert<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = S>,
    {
        let symbols: Vec<S> = sequence.into_iter().collect();
        if self.root.insert_suffix(&symbols) {
            self.len += 1;
        }
    }

    /// True if the full sequence was inserted. The walk must consume every
    /// matched run exactly; a sequence ending partway through a run is not
    /// contained.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        let symbols: Vec<S> = sequence.into_iter().collect();
        let mut node = &self.root;
        let mut rest = symbols.as_slice();
        while !rest.is_empty() {
            let edge = match node.children.get(&rest[0]) {
                Some(edge) => edge,
                None => return false,
            };
            if !rest.starts_with(&edge.run) {
                return false;
            }
            node = &edge.node;
            rest = &rest[edge.run.len()..];
        }
        node.terminal
    }

    /// Lazily enumerate every inserted sequence, collected into `C`.
    pub fn iter<C>(&self) -> Iter<'_, S, ShortNode<S>, C>
    where
        C: FromIterator<S>,
    {
        Iter::new(&self.root)
    }

    /// Lazily enumerate every inserted sequence in level order from the
    /// root. Levels count nodes, not symbols, so one long run is a single
    /// level step.
    pub fn breadth_first<C>(&self) -> BreadthFirst<'_, S, ShortNode<S>, C>
    where
        C: FromIterator<S>,
    {
        BreadthFirst::start(&self.root, &[])
    }

    /// Level-order enumeration restricted to sequences extending `prefix`.
    /// A prefix ending partway through a run still matches; an unmatched
    /// prefix yields nothing.
    pub fn breadth_first_from<I, C>(&self, prefix: I) -> BreadthFirst<'_, S, ShortNode<S>, C>
    where
        I: IntoIterator<Item = S>,
        C: FromIterator<S>,
    {
        let prefix: Vec<S> = prefix.into_iter().collect();
        BreadthFirst::start(&self.root, &prefix)
    }

    /// At most `max_results` inserted sequences that extend `token`,
    /// shallowest first. An unmatched token or a zero bound yields nothing.
    pub fn auto_complete<I, C>(
        &self,
        token: I,
        max_results: usize,
    ) -> AutoComplete<'_, S, ShortNode<S>, C>
    where
        I: IntoIterator<Item = S>,
        C: FromIterator<S>,
    {
        AutoComplete::new(self.breadth_first_from(token), max_results)
    }
}

impl<S> Default for ShortTrie<S> {
    fn default() -> Self {
        ShortTrie::new()
    }
}

impl<S: Clone + Ord, T: IntoIterator<Item = S>> Extend<T> for ShortTrie<S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, sequences: I) {
        for sequence in sequences {
            self.insert(sequence);
        }
    }
}

impl<S: Clone + Ord, T: IntoIterator<Item = S>> FromIterator<T> for ShortTrie<S> {
    fn from_iter<I: IntoIterator<Item = T>>(sequences: I) -> Self {
        let mut trie = ShortTrie::new();
        trie.extend(sequences);
        trie
    }
}
