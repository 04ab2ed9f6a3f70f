//! Graphviz DOT output
//!
//! Nodes are labelled `"<key> [<balance>]"`; absent children are drawn as
//! point-shaped `nullN` placeholders so left/right placement stays visible.

use std::fmt;

use crate::AvlTree;

/// Display adapter emitting `digraph AVL { ... }`
#[derive(Debug)]
pub struct Graphviz<'a, K> {
    tree: &'a AvlTree<K>,
}

impl<'a, K> Graphviz<'a, K> {
    /// Wrap `tree`
    pub fn new(tree: &'a AvlTree<K>) -> Self {
        Self { tree }
    }
}

impl<K: fmt::Display> fmt::Display for Graphviz<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("digraph AVL {")?;
        let mut null_count = 0usize;

        for entry in self.tree.levels() {
            let node = entry.node;
            write!(
                f,
                " \"{key}\" [label=\"{key} [{bf}]\"];",
                key = node.key(),
                bf = node.balance_factor()
            )?;
            for child in [node.left(), node.right()] {
                match child {
                    Some(child) => write!(f, " \"{}\" -> \"{}\";", node.key(), child.key())?,
                    None => {
                        write!(
                            f,
                            " null{n} [shape=point]; \"{}\" -> null{n};",
                            node.key(),
                            n = null_count
                        )?;
                        null_count += 1;
                    }
                }
            }
        }

        f.write_str(" }")
    }
}
