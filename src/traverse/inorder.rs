use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::node::BinaryNode;

pub struct IterInorder<'a, N: BinaryNode<'a>> {
    stack: Vec<N>,
    _marker: PhantomData<&'a N::Key>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, N: BinaryNode<'a>> IterInorder<'a, N> {
    pub(super) fn new(root: Option<N>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            _marker: PhantomData,
        };
        iter.push_left_spine(root);

        iter
    }

    /// Pushes `node` and every node along its chain of left children
    fn push_left_spine(&mut self, mut current: Option<N>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left();
        }
    }
}

impl<'a, N: BinaryNode<'a>> Iterator for IterInorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key())
    }
}

impl<'a, N: BinaryNode<'a>> FusedIterator for IterInorder<'a, N> {}
