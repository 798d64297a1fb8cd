use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::node::BinaryNode;

pub struct IterPreorder<'a, N: BinaryNode<'a>> {
    stack: Vec<N>,
    _marker: PhantomData<&'a N::Key>,
}

impl<'a, N: BinaryNode<'a>> IterPreorder<'a, N> {
    pub(super) fn new(root: Option<N>) -> Self {
        Self {
            stack: root.into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, N: BinaryNode<'a>> Iterator for IterPreorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.key())
    }
}

impl<'a, N: BinaryNode<'a>> FusedIterator for IterPreorder<'a, N> {}
