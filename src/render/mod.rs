//! Text renderings of a tree
//!
//! - Level-order dump: one line per node, for debugging
//! - Graphviz DOT: `dot -Tpng` compatible digraph

mod graphviz;
mod level_dump;

pub use graphviz::Graphviz;
pub use level_dump::LevelDump;

use std::fmt;

use crate::AvlTree;

/// Level-order dump of `tree` (one line per node)
pub fn level_dump<K: fmt::Display>(tree: &AvlTree<K>) -> String {
    LevelDump::new(tree).to_string()
}

/// DOT source for `tree`
pub fn graphviz<K: fmt::Display>(tree: &AvlTree<K>) -> String {
    Graphviz::new(tree).to_string()
}
