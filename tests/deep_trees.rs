//! Sorted input degenerates the tree into a chain as long as the input. Every operation has to
//! cope with that without running out of call stack, including dropping the tree.

use bst_engine::{analysis, engine, traverse, ArenaBSTSet, BSTSet, Link};

/// Inserting sorted keys costs `O(n^2)` in total, so this stays well below the sizes the unit
/// tests reach by linking nodes directly
const KEYS: u32 = 20_000;

#[test]
fn sorted_keys_in_boxed_set() {
    let mut set: BSTSet<u32> = (0..KEYS).collect();

    assert_eq!(set.len(), KEYS as usize);
    assert_eq!(set.height(), KEYS as usize);
    assert_eq!(set.leaf_count(), 1);
    assert!(!set.is_balanced());
    assert!(set.is_valid());
    assert!(set.contains(&(KEYS - 1)));
    assert_eq!(set.min(), Some(&0));
    assert_eq!(set.max(), Some(&(KEYS - 1)));
    assert!(set.iter_inorder().copied().eq(0..KEYS));
    assert!(set.iter_levelorder().copied().eq(0..KEYS));
    assert!(set.iter_postorder().copied().eq((0..KEYS).rev()));

    let copy = set.clone();
    assert!(copy == set);
    assert!(copy.iter_preorder().eq(set.iter_preorder()));

    assert!(set.remove(&(KEYS - 1)));
    assert!(set.remove(&(KEYS / 2)));
    assert!(set.remove(&0));
    assert!(!set.insert(1));
    assert_eq!(set.len(), KEYS as usize - 3);
    assert_eq!(set.height(), KEYS as usize - 3);
    assert!(set.is_valid());

    drop(copy);
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn sorted_keys_in_arena_set() {
    let mut set: ArenaBSTSet<u32> = (0..KEYS).rev().collect();

    assert_eq!(set.len(), KEYS as usize);
    assert_eq!(set.height(), KEYS as usize);
    assert_eq!(set.leaf_count(), 1);
    assert!(!set.is_balanced());
    assert!(set.is_valid());
    assert!(set.contains(&0));
    assert!(set.iter_inorder().copied().eq(0..KEYS));
    assert!(set.iter_preorder().copied().eq((0..KEYS).rev()));

    assert!(set.remove(&0));
    assert!(set.remove(&(KEYS / 2)));
    assert!(set.remove(&(KEYS - 1)));
    assert_eq!(set.len(), KEYS as usize - 3);
    assert_eq!(set.min(), Some(&1));
    assert_eq!(set.max(), Some(&(KEYS - 2)));
    assert!(set.is_valid());

    let copy = set.clone();
    assert!(copy == set);
}

#[test]
fn sorted_keys_through_engine() {
    let mut root: Link<u32> = None;
    for key in 0..KEYS {
        root = engine::insert(root, key);
    }

    assert_eq!(analysis::height(root.as_deref()), KEYS as usize);
    assert_eq!(analysis::count_nodes(root.as_deref()), KEYS as usize);
    assert!(analysis::is_bst(root.as_deref()));
    assert_eq!(traverse::in_order(root.as_deref()).count(), KEYS as usize);
    assert_eq!(traverse::levels(root.as_deref()).len(), KEYS as usize);

    let copy = root.clone();
    assert!(copy == root);

    root = engine::delete(root, &(KEYS - 1));
    root = engine::delete(root, &0);
    assert_eq!(traverse::in_order_keys(root.as_deref()).len(), KEYS as usize - 2);
    assert_eq!(root.as_deref().map(|node| *node.key()), Some(1));
}
