mod error;
mod report;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use bst_engine::{analysis, engine, Link};

use crate::error::DemoError;

/// Builds an unbalanced binary search tree, prints its traversals and structural properties,
/// then deletes a key and prints the remaining keys in order
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Keys to insert, in order. Duplicates are ignored.
    #[arg(default_values_t = [50, 30, 70, 20, 40, 60, 80], allow_negative_numbers = true)]
    keys: Vec<i64>,

    /// Key to delete after the report
    #[arg(short, long, default_value_t = 50, allow_negative_numbers = true)]
    delete: i64,

    /// Also print the keys grouped by depth
    #[arg(short, long)]
    tree: bool,
}

fn build(keys: &[i64]) -> Result<Link<i64>, DemoError> {
    if keys.is_empty() {
        return Err(DemoError::NoKeys);
    }

    let mut root = None;
    for &key in keys {
        let (new_root, inserted) = engine::insert_checked(root, key);
        root = new_root;
        if !inserted {
            debug!("ignoring duplicate key {}", key);
        }
    }

    if !analysis::is_bst(root.as_deref()) {
        return Err(DemoError::Corrupted { stage: "insertion" });
    }
    Ok(root)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut root = build(&args.keys)?;
    info!("built tree with {} nodes", analysis::count_nodes(root.as_deref()));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = report::summary(root.as_deref()).context("failed to format report")?;
    out.write_all(summary.as_bytes()).context("failed to write report")?;

    if args.tree {
        let view = report::tree_view(root.as_deref()).context("failed to format tree view")?;
        out.write_all(view.as_bytes()).context("failed to write tree view")?;
    }

    let (new_root, removed) = engine::take(root, &args.delete);
    root = new_root;
    match removed {
        Some(key) => info!("deleted key {}", key),
        None => info!("key {} not present, nothing deleted", args.delete),
    }

    if !analysis::is_bst(root.as_deref()) {
        return Err(DemoError::Corrupted { stage: "deletion" }.into());
    }

    let remaining = report::after_deletion(root.as_deref()).context("failed to format report")?;
    out.write_all(remaining.as_bytes()).context("failed to write report")?;

    Ok(())
}
