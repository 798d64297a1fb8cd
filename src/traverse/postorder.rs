use std::iter::FusedIterator;
use std::marker::PhantomData;

use crate::node::BinaryNode;

use super::Step;

pub struct IterPostorder<'a, N: BinaryNode<'a>> {
    stack: Vec<Step<N>>,
    _marker: PhantomData<&'a N::Key>,
}

impl<'a, N: BinaryNode<'a>> IterPostorder<'a, N> {
    pub(super) fn new(root: Option<N>) -> Self {
        Self {
            stack: root.map(Step::Expand).into_iter().collect(),
            _marker: PhantomData,
        }
    }
}

impl<'a, N: BinaryNode<'a>> Iterator for IterPostorder<'a, N> {
    type Item = &'a N::Key;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Step::Visit(node) => return Some(node.key()),

                Step::Expand(node) => {
                    self.stack.push(Step::Visit(node));
                    // Right is pushed first so that the left subtree is finished first
                    self.stack.extend(node.right().map(Step::Expand));
                    self.stack.extend(node.left().map(Step::Expand));
                },
            }
        }

        None
    }
}

impl<'a, N: BinaryNode<'a>> FusedIterator for IterPostorder<'a, N> {}
