//! Level-order dump
//!
//! Line format:
//!   `<Root|L|R> <key> left=<key|-> right=<key|-> height=<h> balance=<bf>`

use std::fmt;

use crate::tree::Node;
use crate::AvlTree;

/// Display adapter printing one line per node, breadth first
#[derive(Debug)]
pub struct LevelDump<'a, K> {
    tree: &'a AvlTree<K>,
}

impl<'a, K> LevelDump<'a, K> {
    /// Wrap `tree`
    pub fn new(tree: &'a AvlTree<K>) -> Self {
        Self { tree }
    }
}

struct ChildKey<'a, K>(Option<&'a Node<K>>);

impl<K: fmt::Display> fmt::Display for ChildKey<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => write!(f, "{}", node.key()),
            None => f.write_str("-"),
        }
    }
}

impl<K: fmt::Display> fmt::Display for LevelDump<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.tree.levels() {
            let node = entry.node;
            writeln!(
                f,
                "{} {} left={} right={} height={} balance={}",
                entry.side.label(),
                node.key(),
                ChildKey(node.left()),
                ChildKey(node.right()),
                node.height(),
                node.balance_factor()
            )?;
        }
        Ok(())
    }
}
