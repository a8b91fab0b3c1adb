//! # seqtrie
//!
//! Generic prefix trees over arbitrary symbol sequences.
//!
//! Two interchangeable variants share one operation contract — insert,
//! membership, full iteration, breadth-first enumeration under a prefix,
//! and bounded autocomplete:
//!
//! - [`Trie`]: uncompressed, one symbol per edge. The simplest correct
//!   reference implementation.
//! - [`ShortTrie`]: path-compressed, non-empty symbol runs per edge.
//!   Inserting a sequence that diverges partway through a run splits the
//!   run in place, so the tree stays maximally compressed.
//!
//! ## Core Concepts
//!
//! - **Symbol**: the atomic element of a sequence, any `Clone + Ord` type
//! - **Sequence**: what gets inserted and queried, supplied as any
//!   `IntoIterator` over symbols
//! - **Kind preservation**: traversals collect each reconstructed sequence
//!   into the collection type the caller names, so `String`s come back as
//!   `String`s and tuple-like sequences as their own kind
//!
//! Traversals are lazy: each iterator owns its frame queue and does work
//! only as the caller pulls elements, which is what lets autocomplete stop
//! at its result bound without enumerating the whole subtree.
//!
//! ## Example
//!
//! ```
//! use seqtrie::{ShortTrie, Trie};
//!
//! let words = ["apple", "application", "aardvark", "banana"];
//! let trie: Trie<char> = words.iter().map(|w| w.chars()).collect();
//! let short: ShortTrie<char> = words.iter().map(|w| w.chars()).collect();
//!
//! assert!(trie.contains("apple".chars()));
//! assert!(short.contains("apple".chars()));
//!
//! let hits: Vec<String> = short.auto_complete("app".chars(), 8).collect();
//! assert_eq!(hits.len(), 2);
//!
//! // Compression payoff: one node per fork or sequence end, not per symbol.
//! assert!(short.node_count() < trie.node_count());
//! ```

pub mod short;
pub mod trie;

mod traverse;

pub use short::{ShortNode, ShortTrie};
pub use traverse::{AutoComplete, BreadthFirst, Iter};
pub use trie::{Node, Trie};
