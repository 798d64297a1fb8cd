use std::fmt;
use std::borrow::Borrow;
use std::iter::FromIterator;

use crate::node::{Link, Node};
use crate::traverse::{self, IterInorder, IterLevelorder, IterPostorder, IterPreorder};
use crate::{analysis, engine};

/// An ordered set stored as an unbalanced binary search tree of boxed nodes
///
/// Every key in a node's left subtree is smaller than the node's key and every key in its right
/// subtree is larger. A key is stored at most once: inserting a key equal to one already in the
/// set leaves the set as it was and drops the new key.
///
/// Nothing ever rebalances the tree. Its shape is fixed by the order of insertions and removals,
/// so keys inserted in sorted order end up as a chain with one node per level. All operations
/// still work on such a chain, they just take time proportional to its length.
///
/// The set stores only the root link. [`len`](Self::len) and [`height`](Self::height) count
/// nodes by walking the tree.
#[derive(Clone)]
pub struct BSTSet<T> {
    root: Link<T>,
}

impl<T> Default for BSTSet<T> {
    fn default() -> Self {
        Self {
            root: None,
        }
    }
}

impl<T> fmt::Debug for BSTSet<T>
    where T: Ord + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BSTSet")
            .field("root", &self.root())
            .finish()
    }
}

impl<T: Ord> PartialEq for BSTSet<T> {
    /// Sets are equal when they hold the same keys, whatever the shape of their trees
    fn eq(&self, other: &Self) -> bool {
        self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for BSTSet<T> {}

impl<T: Ord> BSTSet<T> {
    /// Creates a set with no keys, which allocates nothing
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::BSTSet;
    /// let set: BSTSet<u8> = BSTSet::new();
    /// assert!(set.root().is_none());
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the nodes of the tree
    ///
    /// Time complexity: `O(n)`, every node is visited
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::bstset;
    ///
    /// let mut set = bstset![8, 3, 10];
    /// assert_eq!(set.len(), 3);
    /// set.insert(3);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        analysis::count_nodes(self.root())
    }

    /// Returns true if the tree has no root node
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns true if a key equal to `value` is stored in the tree
    ///
    /// `value` can be a borrowed form of the key type (`&str` for a `BSTSet<String>`, say) as long
    /// as both order keys the same way.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::bstset;
    ///
    /// let set = bstset![8, 3, 10];
    /// assert!(set.contains(&10));
    /// assert!(!set.contains(&4));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(value).is_some()
    }

    /// Looks up `value` and returns the key stored in the tree for it
    ///
    /// The stored key is the one that was inserted first. It can differ from `value` in ways that
    /// the ordering ignores.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::BSTSet;
    ///
    /// let mut set = BSTSet::new();
    /// set.insert(String::from("oak"));
    /// assert_eq!(set.get("oak").map(String::len), Some(3));
    /// assert_eq!(set.get("elm"), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.search(value).map(Node::key)
    }

    /// Returns the node whose key equals `value`
    ///
    /// Time complexity: `O(height)`
    pub fn search<Q>(&self, value: &Q) -> Option<&Node<T>>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        engine::search(self.root(), value)
    }

    /// Adds `value` as a new leaf, unless an equal key is already stored
    ///
    /// Returns `true` if a node was added. On `false` the tree is untouched and `value` is
    /// dropped.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::BSTSet;
    ///
    /// let mut set = BSTSet::new();
    /// assert!(set.insert(8));
    /// assert!(set.insert(3));
    /// assert!(!set.insert(8));
    /// assert_eq!(set.root().map(|root| *root.key()), Some(8));
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let (root, inserted) = engine::insert_checked(self.root.take(), value);
        self.root = root;
        inserted
    }

    /// Deletes the key equal to `value`, returning whether there was one
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::bstset;
    ///
    /// let mut set = bstset![8, 3, 10];
    /// assert!(set.remove(&8));
    /// assert!(!set.remove(&8));
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Deletes the key equal to `value` and hands the stored key back
    ///
    /// When the deleted node has two children, its in-order successor moves into its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::BSTSet;
    ///
    /// let mut set: BSTSet<String> = ["m", "c", "x"].iter().map(|s| s.to_string()).collect();
    /// assert_eq!(set.take("m"), Some(String::from("m")));
    /// assert_eq!(set.take("m"), None);
    /// assert_eq!(set.root().map(|root| root.key().as_str()), Some("x"));
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let (root, removed) = engine::take(self.root.take(), value);
        self.root = root;
        removed
    }

    /// Drops every node, leaving an empty tree
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// The leftmost key of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::bstset;
    ///
    /// let set = bstset![50, 30, 70, 20];
    /// assert_eq!(set.min(), Some(&20));
    /// ```
    pub fn min(&self) -> Option<&T> {
        self.root().map(|root| engine::find_min(root).key())
    }

    /// The rightmost key of the tree
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::bstset;
    ///
    /// let set = bstset![50, 30, 70, 20];
    /// assert_eq!(set.max(), Some(&70));
    /// ```
    pub fn max(&self) -> Option<&T> {
        self.root().map(|root| engine::find_max(root).key())
    }

    /// Keys in pre-order: node, left subtree, right subtree
    pub fn iter_preorder(&self) -> IterPreorder<&Node<T>> {
        traverse::pre_order(self.root())
    }

    /// Keys in ascending order
    pub fn iter_inorder(&self) -> IterInorder<&Node<T>> {
        traverse::in_order(self.root())
    }

    /// Keys in post-order: left subtree, right subtree, node
    pub fn iter_postorder(&self) -> IterPostorder<&Node<T>> {
        traverse::post_order(self.root())
    }

    /// Keys level by level from the root, left to right within a level
    pub fn iter_levelorder(&self) -> IterLevelorder<&Node<T>> {
        traverse::level_order(self.root())
    }

    /// Number of levels in the tree, 0 when empty
    ///
    /// Time complexity: `O(n)`
    pub fn height(&self) -> usize {
        analysis::height(self.root())
    }

    /// Number of nodes without children
    ///
    /// Time complexity: `O(n)`
    pub fn leaf_count(&self) -> usize {
        analysis::count_leaf_nodes(self.root())
    }

    /// Whether every node's two subtrees differ in height by at most one
    ///
    /// Time complexity: `O(n)`
    pub fn is_balanced(&self) -> bool {
        analysis::is_balanced(self.root())
    }

    /// Checks the ordering of every key against its ancestors
    ///
    /// The set maintains this on its own, so a `false` here means a bug in the crate.
    ///
    /// Time complexity: `O(n)`
    pub fn is_valid(&self) -> bool {
        analysis::is_bst(self.root())
    }

    /// The root node, for walking the tree by hand
    ///
    /// Which key ends up at the root depends on the order of past insertions and removals. Use
    /// the `iter_*` methods when only the keys matter.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_engine::{bstset, Node};
    ///
    /// // Keys along the path a search for `target` takes
    /// fn search_path<'a>(mut node: Option<&'a Node<i32>>, target: i32) -> Vec<i32> {
    ///     let mut path = Vec::new();
    ///     while let Some(current) = node {
    ///         path.push(*current.key());
    ///         node = if target < *current.key() { current.left() } else { current.right() };
    ///     }
    ///     path
    /// }
    ///
    /// let set = bstset![50, 30, 70, 20, 40];
    /// assert_eq!(search_path(set.root(), 35), [50, 30, 40]);
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

impl<T: Ord> Extend<T> for BSTSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BSTSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
