use std::fmt;

use crate::traverse::Step;

/// An optional, exclusively owned subtree
///
/// `None` is the empty tree.
pub type Link<T> = Option<Box<Node<T>>>;

/// A single node of the binary search tree
///
/// A node owns its children outright. Its key is only ever replaced by the tree itself (when a
/// node with two children is deleted and its in-order successor moves up), never from outside
/// the crate, so a node reachable from a valid tree always satisfies the BST properties.
///
/// Dropping, cloning and comparing a tree walk it with an explicit stack, so the depth of the
/// tree never turns into depth of the call stack.
pub struct Node<T> {
    pub(crate) key: T,
    pub(crate) children: Children<T>,
}

/// The two subtrees of a node
///
/// Kept separate from `Node` so that a node can still be taken apart by value while its subtrees
/// are freed with an explicit stack.
pub(crate) struct Children<T> {
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Drop for Children<T> {
    fn drop(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());

        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.left.take());
            pending.extend(node.children.right.take());
            // `node` has no children left, so freeing it stops here
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        Self::with_children(self.key.clone(), copy_subtree(self.left()), copy_subtree(self.right()))
    }
}

/// Deep copy of the subtree rooted at `root`, built bottom up
fn copy_subtree<T: Clone>(root: Option<&Node<T>>) -> Link<T> {
    let mut steps: Vec<Step<&Node<T>>> = root.map(Step::Expand).into_iter().collect();
    // Copies of finished subtrees, the most recently finished on top
    let mut copies: Vec<Box<Node<T>>> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Expand(node) => {
                steps.push(Step::Visit(node));
                steps.extend(node.right().map(Step::Expand));
                steps.extend(node.left().map(Step::Expand));
            },

            Step::Visit(node) => {
                // The right subtree finished last, so its copy is on top
                let right = if node.has_right() { copies.pop() } else { None };
                let left = if node.has_left() { copies.pop() } else { None };
                copies.push(Box::new(Node::with_children(node.key.clone(), left, right)));
            },
        }
    }

    copies.pop()
}

impl<T: PartialEq> PartialEq for Node<T> {
    /// Two trees are equal if they hold equal keys in the same shape
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];

        while let Some((node, other)) = pending.pop() {
            if node.key != other.key {
                return false;
            }

            for &(child, other_child) in &[(node.left(), other.left()), (node.right(), other.right())] {
                match (child, other_child) {
                    (Some(child), Some(other_child)) => pending.push((child, other_child)),
                    (None, None) => {},
                    _ => return false,
                }
            }
        }

        true
    }
}

impl<T: Eq> Eq for Node<T> {}

impl<T> Node<T> {
    /// Creates a new leaf node
    pub(crate) fn new(key: T) -> Self {
        Self::with_children(key, None, None)
    }

    pub(crate) fn with_children(key: T, left: Link<T>, right: Link<T>) -> Self {
        Self {
            key,
            children: Children {left, right},
        }
    }

    /// Consumes a node whose subtrees have already been taken, returning its key
    pub(crate) fn into_key(self: Box<Self>) -> T {
        let Node {key, ..} = *self;
        key
    }

    /// Returns the key of this node
    pub fn key(&self) -> &T {
        &self.key
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.children.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.children.right.is_some()
    }

    /// Returns true if this node has no children
    pub fn is_leaf(&self) -> bool {
        !self.has_left() && !self.has_right()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.children.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.children.right.as_deref()
    }
}

/// Read-only navigation through a binary tree
///
/// Implemented by cheap, copyable handles to a node. Every traversal and analysis function in
/// this crate is written against this trait, so any tree representation that can hand out
/// handles gets all of them for free.
///
/// # Examples
///
/// ```
/// use bst_engine::{BinaryNode, BSTSet};
///
/// // Sum of the keys on the leftmost path of the tree
/// fn left_spine<'a, N: BinaryNode<'a, Key = i32>>(mut node: Option<N>) -> i32 {
///     let mut sum = 0;
///     while let Some(current) = node {
///         sum += *current.key();
///         node = current.left();
///     }
///     sum
/// }
///
/// let set: BSTSet<i32> = vec![50, 30, 70, 20].into_iter().collect();
/// assert_eq!(left_spine(set.root()), 100);
/// ```
pub trait BinaryNode<'a>: Copy + 'a {
    /// The type of key stored in each node
    type Key: 'a;

    /// Returns the key of this node
    fn key(self) -> &'a Self::Key;

    /// Returns the left child node (subtree) of this node, if any
    fn left(self) -> Option<Self>;

    /// Returns the right child node (subtree) of this node, if any
    fn right(self) -> Option<Self>;

    /// Returns true if this node has no children
    fn is_leaf(self) -> bool {
        self.left().is_none() && self.right().is_none()
    }
}

impl<'a, T: 'a> BinaryNode<'a> for &'a Node<T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.key
    }

    fn left(self) -> Option<Self> {
        self.children.left.as_deref()
    }

    fn right(self) -> Option<Self> {
        self.children.right.as_deref()
    }

    fn is_leaf(self) -> bool {
        Node::is_leaf(self)
    }
}
