//! Invariant checking
//!
//! Verifies, by independent recomputation (cached heights are NOT trusted):
//! - Strictly increasing in-order keys (BST)
//! - |height(left) - height(right)| <= 1 at every node (AVL)
//! - Cached height == 1 + max(child heights)

use thiserror::Error;

use crate::tree::{Node, EMPTY_HEIGHT};

/// Invariant broken at the node with in-order index `position`
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Key is not greater than its in-order predecessor
    #[error("key at in-order position {position} is not greater than its predecessor")]
    OutOfOrder {
        /// In-order index of the offending node
        position: usize,
    },

    /// Child heights differ by more than one
    #[error("node at in-order position {position} has balance factor {balance}")]
    Unbalanced {
        /// In-order index of the offending node
        position: usize,
        /// height(left) - height(right), recomputed
        balance: i32,
    },

    /// Cached height disagrees with the recomputed one
    #[error("node at in-order position {position} caches height {cached}, actual {actual}")]
    StaleHeight {
        /// In-order index of the offending node
        position: usize,
        /// Value stored in the node
        cached: i32,
        /// Value recomputed from the children
        actual: i32,
    },
}

/// Shape of a tree that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeSummary {
    /// Number of nodes
    pub nodes: usize,

    /// Recomputed height (-1 for an empty tree)
    pub height: i32,
}

/// Check every invariant of the tree rooted at `root`
pub fn validate<K: Ord>(root: Option<&Node<K>>) -> Result<TreeSummary, InvariantViolation> {
    let mut checker = Checker {
        prev: None,
        position: 0,
    };
    let height = checker.walk(root)?;
    Ok(TreeSummary {
        nodes: checker.position,
        height,
    })
}

/// Invariant checker state for one in-order walk
struct Checker<'a, K> {
    /// Last key visited
    prev: Option<&'a K>,

    /// Nodes visited so far
    position: usize,
}

impl<'a, K: Ord> Checker<'a, K> {
    /// Returns the recomputed height of `node`
    fn walk(&mut self, node: Option<&'a Node<K>>) -> Result<i32, InvariantViolation> {
        let Some(node) = node else {
            return Ok(EMPTY_HEIGHT);
        };

        let left = self.walk(node.left())?;

        let position = self.position;
        if self.prev.is_some_and(|prev| prev >= node.key()) {
            return Err(InvariantViolation::OutOfOrder { position });
        }
        self.prev = Some(node.key());
        self.position += 1;

        let right = self.walk(node.right())?;

        let actual = 1 + left.max(right);
        if node.height() != actual {
            return Err(InvariantViolation::StaleHeight {
                position,
                cached: node.height(),
                actual,
            });
        }

        let balance = left - right;
        if balance.abs() > 1 {
            return Err(InvariantViolation::Unbalanced { position, balance });
        }

        Ok(actual)
    }
}
