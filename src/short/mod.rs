//! Path-compressed prefix tree
//!
//! Edges carry non-empty runs of symbols instead of single symbols; chains
//! of single-child, non-terminal nodes collapse into one edge. Insertion
//! splits a run in place when a new sequence diverges partway through it.

mod node;
mod tree;

pub use node::ShortNode;
pub use tree::ShortTrie;
