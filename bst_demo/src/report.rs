use std::fmt::{self, Display, Write};

use bst_engine::{analysis, traverse, Node};

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

fn write_keys<'a, T, I>(out: &mut String, label: &str, keys: I) -> fmt::Result
    where T: Display + 'a,
          I: IntoIterator<Item = &'a T>,
{
    write!(out, "{}:", label)?;
    for key in keys {
        write!(out, " {}", key)?;
    }
    writeln!(out)
}

/// The four traversals followed by the structural queries, one per line
pub fn summary<T: Ord + Display>(root: Option<&Node<T>>) -> Result<String, fmt::Error> {
    let mut out = String::new();

    write_keys(&mut out, "In-order Traversal", traverse::in_order(root))?;
    write_keys(&mut out, "Pre-order Traversal", traverse::pre_order(root))?;
    write_keys(&mut out, "Post-order Traversal", traverse::post_order(root))?;
    write_keys(&mut out, "Level-order Traversal", traverse::level_order(root))?;

    writeln!(out, "Height of BST: {}", analysis::height(root))?;
    writeln!(out, "Number of Nodes: {}", analysis::count_nodes(root))?;
    writeln!(out, "Number of Leaf Nodes: {}", analysis::count_leaf_nodes(root))?;
    writeln!(out, "Is Balanced: {}", yes_no(analysis::is_balanced(root)))?;
    writeln!(out, "Is Valid BST: {}", yes_no(analysis::is_bst(root)))?;

    Ok(out)
}

/// Keys grouped by depth, root first
pub fn tree_view<T: Display>(root: Option<&Node<T>>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    for (depth, keys) in traverse::levels(root).into_iter().enumerate() {
        write_keys(&mut out, &format!("Level {}", depth), keys)?;
    }
    Ok(out)
}

pub fn after_deletion<T: Display>(root: Option<&Node<T>>) -> Result<String, fmt::Error> {
    let mut out = String::new();
    write_keys(&mut out, "In-order Traversal after deletion", traverse::in_order(root))?;
    Ok(out)
}
