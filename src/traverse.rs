//! Lazy traversal over prefix-tree nodes
//!
//! Both tree variants implement [`PrefixNode`], so a single set of iterator
//! state machines serves them: the pre-order [`Iter`], the level-order
//! [`BreadthFirst`], and the result-bounded [`AutoComplete`] built on top of
//! it. Each iterator owns its frame queue and reconstructs one full sequence
//! per `next()` call; nothing is materialized ahead of the caller.

use std::collections::VecDeque;
use std::marker::PhantomData;

/// Traversal hooks shared by the two node variants.
///
/// A frame is a pair of the path spelled out from the traversal root and a
/// node reference; `enqueue_children` extends the path by each child edge's
/// symbols (one symbol for the uncompressed trie, a whole run for the
/// compressed one).
pub trait PrefixNode<S>: Sized {
    /// True if some inserted sequence ends exactly at this node.
    fn is_terminal(&self) -> bool;

    /// Queue a frame for every child, with the path extended by its edge.
    fn enqueue_children<'a>(&'a self, path: &[S], sink: &mut VecDeque<(Vec<S>, &'a Self)>);

    /// Walk `token` from this node. Returns the deepest node whose spelled
    /// path has `token` as a prefix, together with that full path, or `None`
    /// when no path spells the token. For the compressed variant the
    /// returned path may extend past `token` when the walk ends partway
    /// through a run.
    fn descend<'a>(&'a self, token: &[S]) -> Option<(&'a Self, Vec<S>)>;
}

/// Depth-first enumeration of every inserted sequence.
///
/// Order is unspecified but deterministic for a given insertion history;
/// re-iterating reproduces the same values.
pub struct Iter<'a, S, N, C> {
    frames: VecDeque<(Vec<S>, &'a N)>,
    _collect: PhantomData<fn() -> C>,
}

impl<'a, S, N, C> Iter<'a, S, N, C> {
    pub(crate) fn new(root: &'a N) -> Self {
        let mut frames = VecDeque::new();
        frames.push_back((Vec::new(), root));
        Iter {
            frames,
            _collect: PhantomData,
        }
    }
}

impl<'a, S, N, C> Iterator for Iter<'a, S, N, C>
where
    S: Clone,
    N: PrefixNode<S>,
    C: FromIterator<S>,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        while let Some((path, node)) = self.frames.pop_back() {
            node.enqueue_children(&path, &mut self.frames);
            if node.is_terminal() {
                return Some(path.into_iter().collect());
            }
        }
        None
    }
}

/// Level-order enumeration of the inserted sequences below a prefix.
///
/// Sequences ending at depth d are yielded before any ending at depth d+1;
/// within a depth, children-map order applies. An unmatched prefix produces
/// an iterator that yields nothing.
pub struct BreadthFirst<'a, S, N, C> {
    frames: VecDeque<(Vec<S>, &'a N)>,
    _collect: PhantomData<fn() -> C>,
}

impl<'a, S, N, C> BreadthFirst<'a, S, N, C> {
    pub(crate) fn start(root: &'a N, token: &[S]) -> Self
    where
        N: PrefixNode<S>,
    {
        let mut frames = VecDeque::new();
        if let Some((node, path)) = root.descend(token) {
            frames.push_back((path, node));
        }
        BreadthFirst {
            frames,
            _collect: PhantomData,
        }
    }
}

impl<'a, S, N, C> Iterator for BreadthFirst<'a, S, N, C>
where
    S: Clone,
    N: PrefixNode<S>,
    C: FromIterator<S>,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        while let Some((path, node)) = self.frames.pop_front() {
            node.enqueue_children(&path, &mut self.frames);
            if node.is_terminal() {
                return Some(path.into_iter().collect());
            }
        }
        None
    }
}

/// At most `max_results` completions of a token, shallowest matches first.
///
/// Wraps [`BreadthFirst`] with a remaining-result counter so truncation
/// short-circuits the traversal instead of trimming a full enumeration.
pub struct AutoComplete<'a, S, N, C> {
    inner: BreadthFirst<'a, S, N, C>,
    remaining: usize,
}

impl<'a, S, N, C> AutoComplete<'a, S, N, C> {
    pub(crate) fn new(inner: BreadthFirst<'a, S, N, C>, max_results: usize) -> Self {
        AutoComplete {
            inner,
            remaining: max_results,
        }
    }
}

impl<'a, S, N, C> Iterator for AutoComplete<'a, S, N, C>
where
    S: Clone,
    N: PrefixNode<S>,
    C: FromIterator<S>,
{
    type Item = C;

    fn next(&mut self) -> Option<C> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.inner.next()?;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
