//! Whole-tree measurements and invariant checks
//!
//! None of these are cached anywhere. Each call walks the tree, so the result always reflects
//! the current structure. The walks keep their own stack of pending nodes, so a tree that has
//! degenerated into a long chain is measured like any other.

use crate::node::BinaryNode;
use crate::traverse::{self, Step};

/// Returns the number of levels in the tree
///
/// The empty tree has height 0 and a single node has height 1.
pub fn height<'a, N: BinaryNode<'a>>(root: Option<N>) -> usize {
    let mut height = 0;
    let mut pending: Vec<(N, usize)> = root.map(|node| (node, 1)).into_iter().collect();

    while let Some((node, depth)) = pending.pop() {
        height = height.max(depth);
        pending.extend(node.left().map(|left| (left, depth + 1)));
        pending.extend(node.right().map(|right| (right, depth + 1)));
    }

    height
}

/// Returns the total number of nodes in the tree
pub fn count_nodes<'a, N: BinaryNode<'a>>(root: Option<N>) -> usize {
    traverse::pre_order(root).count()
}

/// Returns the number of nodes that have no children
pub fn count_leaf_nodes<'a, N: BinaryNode<'a>>(root: Option<N>) -> usize {
    let mut leaves = 0;
    let mut pending: Vec<N> = root.into_iter().collect();

    while let Some(node) = pending.pop() {
        if node.is_leaf() {
            leaves += 1;
        }
        pending.extend(node.left());
        pending.extend(node.right());
    }

    leaves
}

/// Returns true if, at every node, the heights of the left and right subtrees differ by at
/// most one
///
/// Every node is checked, not just the root. The heights are computed in the same post-order
/// pass as the check, so this is `O(n)` and stops at the first unbalanced node.
pub fn is_balanced<'a, N: BinaryNode<'a>>(root: Option<N>) -> bool {
    let mut steps: Vec<Step<N>> = root.map(Step::Expand).into_iter().collect();
    // Heights of finished subtrees, the most recently finished on top
    let mut heights: Vec<usize> = Vec::new();

    while let Some(step) = steps.pop() {
        match step {
            Step::Expand(node) => {
                steps.push(Step::Visit(node));
                steps.extend(node.right().map(Step::Expand));
                steps.extend(node.left().map(Step::Expand));
            },

            Step::Visit(node) => {
                // The right subtree finished last, so its height is on top
                let right = if node.right().is_some() { heights.pop().unwrap_or(0) } else { 0 };
                let left = if node.left().is_some() { heights.pop().unwrap_or(0) } else { 0 };

                let (shorter, taller) = if left < right { (left, right) } else { (right, left) };
                if taller - shorter > 1 {
                    return false;
                }
                heights.push(taller + 1);
            },
        }
    }

    true
}

/// Returns true if the tree satisfies the binary search tree properties
///
/// Every key in a left subtree must be strictly less than its ancestor's key and every key in a
/// right subtree must be strictly greater. The admissible range for each node is tracked with
/// exclusive bounds taken from its ancestors, starting out unbounded at the root. This works for
/// any `Ord` key, including types with no notion of a predecessor or successor value.
pub fn is_bst<'a, N>(root: Option<N>) -> bool
    where N: BinaryNode<'a>,
          N::Key: Ord,
{
    // Each pending node along with its (lower, upper) bounds
    let mut pending: Vec<(N, Option<&'a N::Key>, Option<&'a N::Key>)> =
        root.map(|node| (node, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = pending.pop() {
        let key = node.key();
        let above_lower = lower.map_or(true, |lower| key > lower);
        let below_upper = upper.map_or(true, |upper| key < upper);
        if !above_lower || !below_upper {
            return false;
        }

        pending.extend(node.left().map(|left| (left, lower, Some(key))));
        pending.extend(node.right().map(|right| (right, Some(key), upper)));
    }

    true
}
