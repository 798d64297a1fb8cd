//! An unbalanced binary search tree (BST) over any totally ordered key type.
//!
//! The tree is built from exclusively owned nodes: every node owns at most one left and one
//! right subtree, so there is never any sharing and never any cycles. All structural mutation
//! goes through the functions in [`engine`], which take the root of a subtree and return the
//! (possibly new) root of that subtree. Callers rebind whatever link they passed in, which
//! rebuilds the path from the root down to the mutation site without any parent pointers.
//!
//! Read-only operations ([`traverse`] and [`analysis`]) are written against the
//! [`BinaryNode`] trait, so they work the same way over the boxed tree in [`BSTSet`] and the
//! slab-backed tree in [`ArenaBSTSet`].
//!
//! Nothing is cached: the number of nodes and the height of the tree are always recomputed
//! from the structure itself.
//!
//! ```
//! use bst_engine::BSTSet;
//!
//! let set: BSTSet<_> = [50, 30, 70, 20, 40, 60, 80].iter().copied().collect();
//!
//! let keys: Vec<_> = set.iter_inorder().copied().collect();
//! assert_eq!(keys, [20, 30, 40, 50, 60, 70, 80]);
//! assert_eq!(set.height(), 3);
//! assert!(set.is_balanced());
//! ```

pub mod node;
pub mod engine;
pub mod traverse;
pub mod analysis;
pub mod set;
pub mod slab;
pub mod arena;

pub use node::{BinaryNode, Link, Node};
pub use set::BSTSet;
pub use arena::ArenaBSTSet;

/// Creates a [`BSTSet`] containing the given keys, inserted in the order they are written
///
/// Since the tree is not self-balancing, the order of the keys decides the shape of the tree.
#[macro_export(local_inner_macros)]
macro_rules! bstset {
    ($($key:expr,)+) => { bstset!($($key),+) };
    ($($key:expr),*) => {
        {
            let mut _set = $crate::BSTSet::new();
            $(
                let _ = _set.insert($key);
            )*
            _set
        }
    };
}
