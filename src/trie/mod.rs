//! Uncompressed prefix tree
//!
//! One symbol per edge. This is the simplest correct implementation of the
//! operation contract shared with the compressed variant in [`crate::short`].

mod node;
mod tree;

pub use node::Node;
pub use tree::Trie;
