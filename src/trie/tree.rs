//! Uncompressed prefix tree operations

use super::Node;
use crate::traverse::{AutoComplete, BreadthFirst, Iter};
use serde::{Deserialize, Serialize};

/// An uncompressed prefix tree over symbol sequences.
///
/// Generic over the symbol type `S`; sequences go in as anything iterable
/// over `S` and come back out collected into whatever kind the caller names,
/// so a `String`-keyed trie hands back `String`s and a tuple-keyed one hands
/// back its element collection:
///
/// ```
/// use seqtrie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("apple".chars());
/// trie.insert("application".chars());
///
/// assert!(trie.contains("apple".chars()));
/// assert!(!trie.contains("app".chars()));
///
/// let hits: Vec<String> = trie.auto_complete("app".chars(), 8).collect();
/// assert_eq!(hits, vec!["apple".to_string(), "application".to_string()]);
/// ```
///
/// The root node anchors the empty sequence: inserting an empty sequence
/// marks the root terminal, and an empty query reads that flag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "S: Serialize", deserialize = "S: Deserialize<'de> + Ord"))]
pub struct Trie<S> {
    root: Node<S>,
    len: usize,
}

impl<S> Trie<S> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Trie {
            root: Node::new(),
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

    /// Total node count, the root included. One node exists per distinct
    /// prefix of the inserted sequences.
    pub fn node_count(&self) -> usize {
        self.root.count()
    }
}

impl<S: Clone + Ord> Trie<S> {
    /// Insert a sequence, creating one node per symbol not already present
    /// along its path. Idempotent: re-inserting only re-marks the final
    /// node.
    pub fn insert<I>(&mut self, sequence: I)
    where
        I: IntoIterator<Item = S>,
    {
        let mut node = &mut self.root;
        for symbol in sequence {
            node = node.children.entry(symbol).or_insert_with(Node::new);
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    /// True if the full sequence was inserted. A path that merely continues
    /// past the queried sequence does not count.
    pub fn contains<I>(&self, sequence: I) -> bool
    where
        I: IntoIterator<Item = S>,
    {
        let mut node = &self.root;
        for symbol in sequence {
            match node.children.get(&symbol) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.terminal
    }

    /// Lazily enumerate every inserted sequence, collected into `C`.
    pub fn iter<C>(&self) -> Iter<'_, S, Node<S>, C>
    where
        C: FromIterator<S>,
    {
        Iter::new(&self.root)
    }

    /// Lazily enumerate every inserted sequence in level order from the
    /// root: shorter sequences before longer ones.
    pub fn breadth_first<C>(&self) -> BreadthFirst<'_, S, Node<S>, C>
    where
        C: FromIterator<S>,
    {
        BreadthFirst::start(&self.root, &[])
    }

    /// Level-order enumeration restricted to sequences extending `prefix`.
    /// Yields nothing when no inserted sequence starts with the prefix.
    pub fn breadth_first_from<I, C>(&self, prefix: I) -> BreadthFirst<'_, S, Node<S>, C>
    where
        I: IntoIterator<Item = S>,
        C: FromIterator<S>,
    {
        let prefix: Vec<S> = prefix.into_iter().collect();
        BreadthFirst::start(&self.root, &prefix)
    }

    /// At most `max_results` inserted sequences that extend `token`,
    /// shallowest first. An unmatched token or a zero bound yields nothing.
    pub fn auto_complete<I, C>(&self, token: I, max_results: usize) -> AutoComplete<'_, S, Node<S>, C>
    where
        I: IntoIterator<Item = S>,
        C: FromIterator<S>,
    {
        AutoComplete::new(self.breadth_first_from(token), max_results)
    }
}

impl<S> Default for Trie<S> {
    fn default() -> Self {
        Trie::new()
    }
}

impl<S: Clone + Ord, T: IntoIterator<Item = S>> Extend<T> for Trie<S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, sequences: I) {
        for sequence in sequences {
            self.insert(sequence);
        }
    }
}

impl<S: Clone + Ord, T: IntoIterator<Item = S>> FromIterator<T> for Trie<S> {
    fn from_iter<I: IntoIterator<Item = T>>(sequences: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(sequences);
        trie
    }
}
