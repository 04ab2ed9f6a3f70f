//! # Height-Balanced Search Tree (AVL)
//!
//! In-memory ordered set whose insertion cost is O(log n) comparisons
//! regardless of insertion order.
//!
//! ## Core Algorithm
//!
//! 1. **Recursive descent**: each call consumes a subtree root and returns the new one
//! 2. **Cached heights**: absent = -1, leaf = 0, refreshed on the way back up
//! 3. **Rebalance-on-return**: a balance factor of ±2 triggers one of four rotations
//!    (left, right, left-right, right-left)
//!
//! Result: height ≤ 1.44 · log2(n + 2) after any insertion sequence
//!
//! ## Usage Example
//!
//! ```
//! use avl_engine::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for key in 1..=7 {
//!     tree.insert(key)?;
//! }
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.root().map(|n| *n.key()), Some(4));
//! # Ok::<(), avl_engine::TreeError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules
pub mod tree;      // Node model, rotations, insert, traversal
pub mod config;    // Insertion policy
pub mod stats;     // Rotation counters
pub mod validate;  // Independent invariant checks
pub mod render;    // Level dump and Graphviz output

// Re-exports for convenience
pub use config::{DuplicatePolicy, TreeConfig};
pub use stats::RotationStats;
pub use tree::{AvlTree, Node, Outcome, Rotation};
pub use validate::{InvariantViolation, TreeSummary};

use thiserror::Error;

/// Errors returned by [`AvlTree`] operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Key already present and the policy is [`DuplicatePolicy::Reject`]
    #[error("key is already present")]
    DuplicateKey,

    /// Node budget exhausted
    #[error("tree is full: capacity {capacity} nodes")]
    CapacityExceeded {
        /// Configured maximum number of nodes
        capacity: usize,
    },

    /// Configuration cannot be used
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Structural invariant broken
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(TreeError::DuplicateKey.to_string(), "key is already present");
        assert_eq!(
            TreeError::CapacityExceeded { capacity: 8 }.to_string(),
            "tree is full: capacity 8 nodes"
        );
    }

    #[test]
    fn test_invariant_conversion() {
        let err: TreeError = InvariantViolation::OutOfOrder { position: 3 }.into();
        assert_eq!(
            err.to_string(),
            "invariant violated: key at in-order position 3 is not greater than its predecessor"
        );
    }
}
