//! Depth-first and breadth-first traversals over any [`BinaryNode`]
//!
//! Each traversal is a lazy iterator over the keys of the tree. The iterators keep an explicit
//! stack (or queue) instead of recursing, so even very skewed trees can be walked without
//! growing the call stack.

mod preorder;
mod inorder;
mod postorder;
mod levelorder;

pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use levelorder::*;

use crate::node::BinaryNode;

/// Stack entry for walks that handle a node only after both of its subtrees
///
/// A node is first pushed as `Expand`. When it is popped in that state its children are pushed
/// above it and the node itself goes back on the stack as `Visit`, which is only popped once both
/// subtrees are done.
#[derive(Clone, Copy)]
pub(crate) enum Step<N> {
    Expand(N),
    Visit(N),
}

/// Visits the left subtree, then the node, then the right subtree
///
/// For a valid binary search tree this yields the keys in strictly ascending order.
pub fn in_order<'a, N: BinaryNode<'a>>(root: Option<N>) -> IterInorder<'a, N> {
    IterInorder::new(root)
}

/// Visits the node, then the left subtree, then the right subtree
pub fn pre_order<'a, N: BinaryNode<'a>>(root: Option<N>) -> IterPreorder<'a, N> {
    IterPreorder::new(root)
}

/// Visits the left subtree, then the right subtree, then the node
pub fn post_order<'a, N: BinaryNode<'a>>(root: Option<N>) -> IterPostorder<'a, N> {
    IterPostorder::new(root)
}

/// Visits the tree one level at a time, starting at the root, left to right within each level
pub fn level_order<'a, N: BinaryNode<'a>>(root: Option<N>) -> IterLevelorder<'a, N> {
    IterLevelorder::new(root)
}

/// All the keys of the tree in [`in_order`], collected into a `Vec`
///
/// # Examples
///
/// ```
/// use bst_engine::{bstset, traverse};
///
/// let set = bstset![50, 30, 70];
/// assert_eq!(traverse::in_order_keys(set.root()), [&30, &50, &70]);
/// assert_eq!(traverse::pre_order_keys(set.root()), [&50, &30, &70]);
/// ```
pub fn in_order_keys<'a, N: BinaryNode<'a>>(root: Option<N>) -> Vec<&'a N::Key> {
    in_order(root).collect()
}

/// All the keys of the tree in [`pre_order`], collected into a `Vec`
pub fn pre_order_keys<'a, N: BinaryNode<'a>>(root: Option<N>) -> Vec<&'a N::Key> {
    pre_order(root).collect()
}

/// All the keys of the tree in [`post_order`], collected into a `Vec`
pub fn post_order_keys<'a, N: BinaryNode<'a>>(root: Option<N>) -> Vec<&'a N::Key> {
    post_order(root).collect()
}

/// All the keys of the tree in [`level_order`], collected into a `Vec`
pub fn level_order_keys<'a, N: BinaryNode<'a>>(root: Option<N>) -> Vec<&'a N::Key> {
    level_order(root).collect()
}

/// Groups the keys of the tree by depth
///
/// The first entry holds the root, the second entry holds its children, and so on. Within each
/// level the keys are ordered left to right. The number of entries equals the height of the
/// tree.
///
/// # Examples
///
/// ```
/// use bst_engine::{bstset, traverse};
///
/// let set = bstset![50, 30, 70, 20];
/// let levels = traverse::levels(set.root());
/// assert_eq!(levels, vec![vec![&50], vec![&30, &70], vec![&20]]);
/// ```
pub fn levels<'a, N: BinaryNode<'a>>(root: Option<N>) -> Vec<Vec<&'a N::Key>> {
    let mut levels = Vec::new();
    let mut current: Vec<N> = root.into_iter().collect();

    while !current.is_empty() {
        let mut next = Vec::with_capacity(current.len() * 2);
        let mut keys = Vec::with_capacity(current.len());
        for node in current {
            keys.push(node.key());
            next.extend(node.left());
            next.extend(node.right());
        }

        levels.push(keys);
        current = next;
    }

    levels
}
