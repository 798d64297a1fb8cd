//! Structural operations on a boxed binary search tree
//!
//! Every function here takes the root of a subtree and returns the (possibly new) root of that
//! subtree. To mutate a tree, pass in its root and rebind the root to the returned value:
//!
//! ```
//! use bst_engine::engine;
//!
//! let mut root = None;
//! for &key in &[50, 30, 70] {
//!     root = engine::insert(root, key);
//! }
//! root = engine::delete(root, &50);
//!
//! assert!(engine::search(root.as_deref(), &50).is_none());
//! assert_eq!(root.as_ref().map(|node| *node.key()), Some(70));
//! ```
//!
//! Read-only queries ([`search`], [`find_min`], [`find_max`]) work on any [`BinaryNode`].
//!
//! Nothing here recurses. Sorted input builds a tree as deep as it is long, and these functions
//! handle that the same way as any other tree.

use std::mem;
use std::borrow::Borrow;
use std::cmp::Ordering;

use log::trace;

use crate::node::{BinaryNode, Link, Node};

/// Allocates a new leaf node holding `key`
pub fn create<T>(key: T) -> Box<Node<T>> {
    trace!("allocating leaf node");
    Box::new(Node::new(key))
}

/// Inserts `key` into the subtree rooted at `root` and returns the new root of that subtree
///
/// Inserting a key that is already present leaves the tree unchanged and drops the given key.
pub fn insert<T: Ord>(root: Link<T>, key: T) -> Link<T> {
    insert_checked(root, key).0
}

/// Same as [`insert`], but also returns whether a new node was created
pub fn insert_checked<T: Ord>(mut root: Link<T>, key: T) -> (Link<T>, bool) {
    // Duplicate keys are silently ignored
    if search(root.as_deref(), &key).is_some() {
        return (root, false);
    }

    let mut current = &mut root;
    while let Some(node) = current {
        current = if key < node.key {
            &mut node.children.left
        } else {
            &mut node.children.right
        };
    }
    *current = Some(create(key));

    (root, true)
}

/// Returns the node holding `key` in the subtree rooted at `root`, or `None` if the key is
/// absent
///
/// The key may be any borrowed form of the tree's key type, but the ordering on the borrowed
/// form must match the ordering on the key type.
///
/// Time complexity: `O(height)`
pub fn search<'a, N, Q>(mut root: Option<N>, key: &Q) -> Option<N>
    where N: BinaryNode<'a>,
          N::Key: Borrow<Q>,
          Q: Ord + ?Sized,
{
    while let Some(node) = root {
        root = match key.cmp(node.key().borrow()) {
            Ordering::Less => node.left(),
            Ordering::Greater => node.right(),
            Ordering::Equal => return Some(node),
        };
    }

    None
}

/// Returns the node holding the smallest key in the subtree rooted at `node`
///
/// The subtree always contains at least `node` itself, so there is always a minimum.
pub fn find_min<'a, N: BinaryNode<'a>>(mut node: N) -> N {
    while let Some(left) = node.left() {
        node = left;
    }

    node
}

/// Returns the node holding the largest key in the subtree rooted at `node`
pub fn find_max<'a, N: BinaryNode<'a>>(mut node: N) -> N {
    while let Some(right) = node.right() {
        node = right;
    }

    node
}

/// Deletes `key` from the subtree rooted at `root` and returns the new root of that subtree
///
/// Deleting a key that is not present leaves the tree unchanged.
pub fn delete<T, Q>(root: Link<T>, key: &Q) -> Link<T>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    take(root, key).0
}

/// Same as [`delete`], but also hands back the removed key (if any)
///
/// A node with at most one child is replaced by that child. A node with two children stays in
/// place: its key is replaced by its in-order successor (the minimum of its right subtree) and
/// the successor's node is removed from the right subtree instead.
pub fn take<T, Q>(root: Link<T>, key: &Q) -> (Link<T>, Option<T>)
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let mut path = Vec::new();
    let mut current = root;

    while let Some(mut node) = current {
        match key.cmp(node.key.borrow()) {
            Ordering::Less => {
                current = node.children.left.take();
                path.push((node, Side::Left));
            },

            Ordering::Greater => {
                current = node.children.right.take();
                path.push((node, Side::Right));
            },

            Ordering::Equal => {
                let (replacement, removed) = unlink(node);
                return (reattach(path, replacement), Some(removed));
            },
        }
    }

    // Not found, so the walk ended on an empty subtree
    (reattach(path, None), None)
}

/// Which child link of its parent a detached node came from
#[derive(Debug, Clone, Copy)]
enum Side {
    Left,
    Right,
}

/// Hangs `subtree` back under the nodes detached along the way down, from the bottom up
///
/// Returns the root of the rebuilt tree.
fn reattach<T>(mut path: Vec<(Box<Node<T>>, Side)>, mut subtree: Link<T>) -> Link<T> {
    while let Some((mut parent, side)) = path.pop() {
        match side {
            Side::Left => parent.children.left = subtree,
            Side::Right => parent.children.right = subtree,
        }
        subtree = Some(parent);
    }

    subtree
}

/// Removes `node` from its subtree, returning what takes its place along with its key
fn unlink<T>(mut node: Box<Node<T>>) -> (Link<T>, T) {
    match (node.children.left.take(), node.children.right.take()) {
        (None, right) => {
            trace!("deleting node with no left subtree");
            (right, node.into_key())
        },

        (left, None) => {
            trace!("deleting node with only a left subtree");
            (left, node.into_key())
        },

        (Some(left), Some(right)) => {
            trace!("deleting node with two subtrees, moving in-order successor up");
            let (right, successor) = detach_min(right);
            let removed = mem::replace(&mut node.key, successor.into_key());
            node.children.left = Some(left);
            node.children.right = right;
            (Some(node), removed)
        },
    }
}

/// Removes the node holding the minimum key of the (non-empty) subtree rooted at `node`
///
/// Returns the new root of the subtree along with the removed node, which has no children.
fn detach_min<T>(mut node: Box<Node<T>>) -> (Link<T>, Box<Node<T>>) {
    let mut path = Vec::new();
    while let Some(left) = node.children.left.take() {
        path.push((node, Side::Left));
        node = left;
    }

    // The minimum has no left subtree, so its right subtree takes its place
    let right = node.children.right.take();
    (reattach(path, right), node)
}
