//! A binary search tree whose nodes live in a [`Slab`] and refer to each other through stable
//! [`Ptr`] handles instead of boxes
//!
//! The resulting shapes are the same as in [`engine`](crate::engine). Insertion and deletion walk
//! down from the root in a loop, keeping track of the parent link that led to the current node,
//! and rewrite that one link once the walk is done. Removed nodes go on the slab's free list and
//! their slots are reused by later insertions.

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

use log::trace;

use crate::node::BinaryNode;
use crate::slab::{Ptr, Slab};
use crate::traverse::{self, IterInorder, IterLevelorder, IterPostorder, IterPreorder};
use crate::{analysis, engine};

#[derive(Debug, Clone, PartialEq, Eq)]
struct ArenaNode<T> {
    key: T,
    left: Ptr,
    right: Ptr,
}

impl<T> ArenaNode<T> {
    fn new(key: T) -> Self {
        Self {
            key,
            left: Ptr::null(),
            right: Ptr::null(),
        }
    }
}

/// A link in the tree: either the root pointer of the set or one child pointer of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Root,
    Left(Ptr),
    Right(Ptr),
}

/// A single node of an [`ArenaBSTSet`]
pub struct NodeRef<'a, T> {
    nodes: &'a Slab<ArenaNode<T>>,
    node: &'a ArenaNode<T>,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        Self {..*self}
    }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T: fmt::Debug> fmt::Debug for NodeRef<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", self.key())
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<'a, T> NodeRef<'a, T> {
    fn new(nodes: &'a Slab<ArenaNode<T>>, ptr: Ptr) -> Option<Self> {
        nodes.get(ptr).map(|node| Self {nodes, node})
    }

    /// Returns the key of this node
    pub fn key(&self) -> &'a T {
        &self.node.key
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.left)
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<Self> {
        Self::new(self.nodes, self.node.right)
    }
}

impl<'a, T: 'a> BinaryNode<'a> for NodeRef<'a, T> {
    type Key = T;

    fn key(self) -> &'a T {
        &self.node.key
    }

    fn left(self) -> Option<Self> {
        NodeRef::left(&self)
    }

    fn right(self) -> Option<Self> {
        NodeRef::right(&self)
    }

    fn is_leaf(self) -> bool {
        self.node.left.is_null() && self.node.right.is_null()
    }
}

/// A binary search tree (BST) set backed by a slab of nodes
///
/// Behaves exactly like [`BSTSet`](crate::BSTSet) (same BST properties, same shape for the same
/// sequence of operations, duplicates ignored) but allocates nodes from a single growable buffer.
/// Slots freed by removals are reused by later insertions.
#[derive(Clone)]
pub struct ArenaBSTSet<T> {
    nodes: Slab<ArenaNode<T>>,
    root: Ptr,
}

impl<T> Default for ArenaBSTSet<T> {
    fn default() -> Self {
        Self {
            nodes: Slab::default(),
            root: Ptr::null(),
        }
    }
}

impl<T> fmt::Debug for ArenaBSTSet<T>
    where T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArenaBSTSet")
            .field("root", &self.root())
            .finish()
    }
}

impl<T: Ord> PartialEq for ArenaBSTSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for ArenaBSTSet<T> {}

impl<T: Ord> ArenaBSTSet<T> {
    /// Creates an empty `ArenaBSTSet`
    ///
    /// The set is initially created with a capacity of 0, so it will not allocate until it is first
    /// inserted into.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with the specified capacity.
    ///
    /// The set will be able to hold at least `capacity` elements without reallocating. If
    /// `capacity` is 0, the set will not allocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::ArenaBSTSet;
    /// let set: ArenaBSTSet<&str> = ArenaBSTSet::with_capacity(100);
    /// assert!(set.capacity() >= 100);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            root: Ptr::null(),
        }
    }

    /// Returns the number of items in the set
    ///
    /// Every occupied slot in the slab is a node of the tree, so this does not need to walk the
    /// tree.
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the set is empty
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.nodes.is_empty(), self.root.is_null());
        self.root.is_null()
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// Time complexity: `O(height)`
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }

    /// Returns a reference to the value in the set, or `None` if no such value exists
    ///
    /// Time complexity: `O(height)`
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(value).map(|node| node.key())
    }

    /// Returns the node holding the specified value, or `None` if no such value exists
    pub fn search<Q>(&self, value: &Q) -> Option<NodeRef<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        engine::search(self.root(), value)
    }

    /// Inserts a new value into the set
    ///
    /// Returns `true` if the value was not already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::ArenaBSTSet;
    ///
    /// let mut set = ArenaBSTSet::new();
    /// assert!(set.insert(37));
    /// assert!(!set.insert(37));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let slot = self.find_slot(&value);
        // Duplicate keys are silently ignored
        if !self.link(slot).is_null() {
            return false;
        }

        let node = self.nodes.push(ArenaNode::new(value));
        self.set_link(slot, node);
        true
    }

    /// Removes a value from the set. Returns whether the value was present in the set.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the value in the set, if any, that is equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::ArenaBSTSet;
    ///
    /// let mut set: ArenaBSTSet<_> = vec![50, 30, 70].into_iter().collect();
    /// assert_eq!(set.take(&50), Some(50));
    /// assert_eq!(set.take(&50), None);
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let slot = self.find_slot(value);
        let target = self.link(slot);
        let (left, right) = match self.nodes.get(target) {
            Some(node) => (node.left, node.right),
            None => return None,
        };

        let replacement = if left.is_null() {
            trace!("deleting arena node with no left subtree");
            right
        } else if right.is_null() {
            trace!("deleting arena node with only a left subtree");
            left
        } else {
            trace!("deleting arena node with two subtrees, moving in-order successor up");
            // The successor node itself moves into the target's position
            let successor = self.detach_min(Slot::Right(target));
            let right = self.link(Slot::Right(target));
            self.set_link(Slot::Left(successor), left);
            self.set_link(Slot::Right(successor), right);
            successor
        };

        self.set_link(slot, replacement);
        self.nodes.remove(target).map(|node| node.key)
    }

    /// Clears the set, removing all elements
    ///
    /// Note that this method has no effect on the allocated capacity of the set.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = Ptr::null();
    }

    /// Returns the smallest value in the set, if any
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| engine::find_min(root).key())
    }

    /// Returns the largest value in the set, if any
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| engine::find_max(root).key())
    }

    /// Performs a pre-order traversal of the tree
    pub fn iter_preorder(&self) -> IterPreorder<NodeRef<T>> {
        traverse::pre_order(self.root())
    }

    /// Performs an in-order traversal of the tree
    pub fn iter_inorder(&self) -> IterInorder<NodeRef<T>> {
        traverse::in_order(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<NodeRef<T>> {
        traverse::post_order(self.root())
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    pub fn iter_levelorder(&self) -> IterLevelorder<NodeRef<T>> {
        traverse::level_order(self.root())
    }

    /// Returns the number of levels in the tree (0 for an empty set)
    pub fn height(&self) -> usize {
        analysis::height(self.root())
    }

    /// Returns the number of nodes in the tree that have no children
    pub fn leaf_count(&self) -> usize {
        analysis::count_leaf_nodes(self.root())
    }

    /// Returns true if the heights of the two subtrees of every node differ by at most one
    pub fn is_balanced(&self) -> bool {
        analysis::is_balanced(self.root())
    }

    /// Returns true if the tree satisfies the BST properties
    pub fn is_valid(&self) -> bool {
        analysis::is_bst(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing traversals.
    pub fn root(&self) -> Option<NodeRef<T>> {
        NodeRef::new(&self.nodes, self.root)
    }

    /// Reserves capacity for at least `additional` more elements to be inserted in the set. The
    /// collection may reserve more space to avoid frequent reallocations.
    ///
    /// # Panics
    ///
    /// Panics if the new allocation size overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional)
    }

    /// Shrinks the capacity of the set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit()
    }

    /// Finds the link that points at the node holding `key`, or the null link where that node
    /// would be inserted
    fn find_slot<Q>(&self, key: &Q) -> Slot
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut slot = Slot::Root;
        let mut current = self.root;

        while let Some(node) = self.nodes.get(current) {
            match key.cmp(node.key.borrow()) {
                Ordering::Less => {
                    slot = Slot::Left(current);
                    current = node.left;
                },

                Ordering::Greater => {
                    slot = Slot::Right(current);
                    current = node.right;
                },

                Ordering::Equal => break,
            }
        }

        slot
    }

    /// Unlinks the node holding the minimum key of the non-empty subtree hanging from `slot`,
    /// returning its handle
    ///
    /// The node stays allocated. Its right subtree takes its place.
    fn detach_min(&mut self, mut slot: Slot) -> Ptr {
        let mut current = self.link(slot);
        while let Some(node) = self.nodes.get(current) {
            if node.left.is_null() {
                break;
            }

            slot = Slot::Left(current);
            current = node.left;
        }

        let right = self.link(Slot::Right(current));
        self.set_link(slot, right);
        current
    }

    /// Returns the node that `slot` points at (null for an empty subtree)
    fn link(&self, slot: Slot) -> Ptr {
        match slot {
            Slot::Root => self.root,
            Slot::Left(parent) => self.nodes.get(parent).map_or(Ptr::null(), |node| node.left),
            Slot::Right(parent) => self.nodes.get(parent).map_or(Ptr::null(), |node| node.right),
        }
    }

    fn set_link(&mut self, slot: Slot, child: Ptr) {
        match slot {
            Slot::Root => self.root = child,

            Slot::Left(parent) => if let Some(node) = self.nodes.get_mut(parent) {
                node.left = child;
            },

            Slot::Right(parent) => if let Some(node) = self.nodes.get_mut(parent) {
                node.right = child;
            },
        }
    }
}

impl<T: Ord> Extend<T> for ArenaBSTSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for ArenaBSTSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::BTreeSet;

    use rand::prelude::*;

    use crate::BSTSet;

    #[test]
    fn test_reference_tree() {
        let mut set: ArenaBSTSet<i32> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();

        let keys: Vec<_> = set.iter_inorder().copied().collect();
        assert_eq!(&keys, &[20, 30, 40, 50, 60, 70, 80]);
        let keys: Vec<_> = set.iter_preorder().copied().collect();
        assert_eq!(&keys, &[50, 30, 20, 40, 70, 60, 80]);
        let keys: Vec<_> = set.iter_postorder().copied().collect();
        assert_eq!(&keys, &[20, 40, 30, 60, 80, 70, 50]);
        let keys: Vec<_> = set.iter_levelorder().copied().collect();
        assert_eq!(&keys, &[50, 30, 70, 20, 40, 60, 80]);

        assert_eq!(set.height(), 3);
        assert_eq!(set.len(), 7);
        assert_eq!(set.leaf_count(), 4);
        assert!(set.is_balanced());
        assert!(set.is_valid());
        assert_eq!(set.min(), Some(&20));
        assert_eq!(set.max(), Some(&80));

        assert!(set.remove(&50));
        let keys: Vec<_> = set.iter_inorder().copied().collect();
        assert_eq!(&keys, &[20, 30, 40, 60, 70, 80]);
        assert_eq!(set.root().map(|root| *root.key()), Some(60));
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn test_empty_set() {
        let set: ArenaBSTSet<i32> = ArenaBSTSet::new();

        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.capacity(), 0);
        assert_eq!(set.height(), 0);
        assert_eq!(set.leaf_count(), 0);
        assert!(set.is_balanced());
        assert!(set.is_valid());
        assert_eq!(set.min(), None);
        assert!(set.root().is_none());
    }

    #[test]
    fn test_removed_slots_are_reused() {
        let mut set: ArenaBSTSet<_> = (0..32).collect();
        let capacity = set.capacity();

        for value in 0..16 {
            assert!(set.remove(&value));
        }
        for value in 100..116 {
            assert!(set.insert(value));
        }

        assert_eq!(set.len(), 32);
        assert_eq!(set.capacity(), capacity);
        assert!(set.is_valid());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut set: ArenaBSTSet<_> = (0..10).map(|i| i.to_string()).collect();
        let capacity = set.capacity();

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), capacity);
        assert!(!set.contains("3"));

        assert!(set.insert("3".to_string()));
        assert!(set.contains("3"));
    }

    #[test]
    fn test_debug() {
        let set: ArenaBSTSet<_> = vec![2, 1].into_iter().collect();
        assert_eq!(
            format!("{:?}", set),
            "ArenaBSTSet { root: Some(Node { key: 2, left: Some(Node { key: 1, left: None, right: None }), right: None }) }",
        );
    }

    #[test]
    fn test_two_child_delete_relinks_successor() {
        let mut set: ArenaBSTSet<i32> = vec![50, 30, 70, 60, 65, 80].into_iter().collect();
        let successor = set.link(set.find_slot(&60));

        assert_eq!(set.take(&50), Some(50));
        // The successor's node now sits at the root, with the old root's subtrees
        assert_eq!(set.link(Slot::Root), successor);
        assert_eq!(set.root().map(|root| *root.key()), Some(60));
        let keys: Vec<_> = set.iter_preorder().copied().collect();
        assert_eq!(&keys, &[60, 30, 70, 65, 80]);
        assert_eq!(set.len(), 5);
    }

    /// A chain of `len` nodes where every node only has a right child: 0, 1, 2, ...
    fn right_spine(len: u32) -> ArenaBSTSet<u32> {
        let mut set = ArenaBSTSet::with_capacity(len as usize);
        for key in (0..len).rev() {
            let node = ArenaNode {key, left: Ptr::null(), right: set.root};
            set.root = set.nodes.push(node);
        }
        set
    }

    #[test]
    fn test_deep_spine() {
        const LEN: u32 = 100_000;
        let mut set = right_spine(LEN);

        assert_eq!(set.len(), LEN as usize);
        assert_eq!(set.height(), LEN as usize);
        assert_eq!(set.leaf_count(), 1);
        assert!(!set.is_balanced());
        assert!(set.is_valid());
        assert!(set.contains(&(LEN - 1)));
        assert!(!set.contains(&LEN));
        assert!(set.iter_inorder().copied().eq(0..LEN));
        assert!(set.iter_postorder().copied().eq((0..LEN).rev()));

        // Grow a node with two children at the very bottom, then delete it
        assert!(set.insert(LEN + 1));
        assert!(set.insert(LEN));
        assert!(set.insert(LEN + 2));
        assert!(!set.insert(LEN));
        assert_eq!(set.take(&(LEN + 1)), Some(LEN + 1));

        assert!(set.remove(&(LEN - 1)));
        assert!(set.remove(&0));
        assert!(!set.remove(&(LEN + 1)));

        assert_eq!(set.len(), LEN as usize);
        assert!(set.is_valid());
        assert_eq!(set.min(), Some(&1));
        assert_eq!(set.max(), Some(&(LEN + 2)));
        assert!(set.iter_inorder().copied().eq((1..LEN - 1).chain(vec![LEN, LEN + 2])));

        let copy = set.clone();
        assert!(copy == set);
    }

    #[test]
    fn test_random_operations() {
        cfg_if::cfg_if! {
            if #[cfg(miri)] {
                const TEST_CASES: usize = 16;
                const OPERATIONS: usize = 24;

                (0..TEST_CASES).into_iter().for_each(|_| test_case());

            } else {
                use rayon::prelude::*;

                const TEST_CASES: usize = 1024;
                const OPERATIONS: usize = 128;

                (0..TEST_CASES).into_par_iter().for_each(|_| test_case());
            }
        }

        fn test_case() {
            let mut set = ArenaBSTSet::new();
            // The boxed tree must end up with the exact same shape
            let mut boxed = BSTSet::new();
            let mut expected = BTreeSet::new();

            let mut rng = rand::thread_rng();
            for _ in 0..rng.gen_range(OPERATIONS..=OPERATIONS*2) {
                let value = rng.gen_range(0..=64);

                if rng.gen_bool(0.6) {
                    assert_eq!(set.insert(value), expected.insert(value));
                    boxed.insert(value);
                } else {
                    assert_eq!(set.take(&value), expected.take(&value));
                    boxed.remove(&value);
                }

                assert_eq!(set.len(), expected.len());
                assert!(set.is_valid());
                assert!(set.iter_inorder().eq(expected.iter()));
                assert!(set.iter_preorder().eq(boxed.iter_preorder()));
                assert_eq!(set.height(), boxed.height());
            }
        }
    }
}
