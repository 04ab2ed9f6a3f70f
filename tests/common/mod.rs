#![allow(dead_code)]

use avl_engine::{AvlTree, Node, TreeError, TreeSummary};
use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber once; filter comes from `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Build a tree, panicking on any insertion error
pub fn build<K: Ord>(keys: impl IntoIterator<Item = K>) -> AvlTree<K> {
    let mut tree = AvlTree::new();
    for key in keys {
        tree.insert(key).expect("insert succeeds");
    }
    tree
}

/// Validate and lift the violation into `TreeError`
pub fn check<K: Ord>(tree: &AvlTree<K>) -> Result<TreeSummary, TreeError> {
    Ok(tree.validate()?)
}

/// Height recomputed by walking the subtree (ignores the cache)
pub fn walk_height<K>(node: Option<&Node<K>>) -> i32 {
    match node {
        None => -1,
        Some(n) => 1 + walk_height(n.left()).max(walk_height(n.right())),
    }
}

/// Number of nodes, counted by walking
pub fn count_nodes<K>(node: Option<&Node<K>>) -> usize {
    match node {
        None => 0,
        Some(n) => 1 + count_nodes(n.left()) + count_nodes(n.right()),
    }
}

/// Upper bound on AVL height for `n` nodes: 1.4405 · log2(n + 2) - 0.3277
pub fn avl_height_bound(n: usize) -> i32 {
    (1.4405 * ((n + 2) as f64).log2() - 0.3277).floor() as i32
}
