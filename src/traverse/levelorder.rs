use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::collections::VecDeque;

use crate::node::BinaryNode;

/// Breadth-first traversal
///
/// Uses a queue, so the whole walk is `O(n)` rather than re-walking the tree once per level.
pub struct IterLevelorder<'a, N: BinaryNode<'a>> {
    queue: VecDeque<N>,
    _marker: PhantomData<&'a N::Key>,
}

impl<'a, N: BinaryNode<'a>> IterLevelorder<'a, N> {
    pub(super) fn new(root: Option<N>) -> Self {
        Self {
            queue: root.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

impl<'a, N: BinaryNode<'a>> Iterator for IterLevelorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.key())
    }
}

impl<'a, N: BinaryNode<'a>> FusedIterator for IterLevelorder<'a, N> {}
