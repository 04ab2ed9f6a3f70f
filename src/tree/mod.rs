//! Height-balanced (AVL) search tree
//!
//! Key invariant: |height(left) - height(right)| <= 1 at every node,
//! restored after each insertion by at most one single or double rotation.
//!
//! Ownership is strictly top-down (`Option<Box<Node>>`), so rotations are
//! plain moves: no node is ever reachable from two links at once.

pub mod insert;
mod node;
pub mod rotation;
mod traversal;

pub use insert::{insert, insert_with, Outcome};
pub use node::{height, Link, Node, EMPTY_HEIGHT};
pub use rotation::Rotation;
pub use traversal::{Iter, LevelEntry, Levels, Side};

use std::cmp::Ordering;

use crate::config::{DuplicatePolicy, TreeConfig};
use crate::stats::RotationStats;
use crate::validate::{self, InvariantViolation, TreeSummary};
use crate::TreeError;

/// Ordered set of keys backed by an AVL tree
#[derive(Debug, Clone)]
pub struct AvlTree<K> {
    /// Root node (None = empty)
    root: Link<K>,

    /// Number of nodes
    len: usize,

    /// Insertion policy
    config: TreeConfig,

    /// Rotation counters (only updated when tracking is enabled)
    stats: RotationStats,
}

impl<K> AvlTree<K> {
    /// Create empty tree with default configuration
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            config: TreeConfig::default(),
            stats: RotationStats::new(),
        }
    }

    /// Create empty tree with `config`
    pub fn with_config(config: TreeConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Root node, for read-only collaborators
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Number of keys
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// No keys at all
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the whole tree (-1 when empty, 0 for a single node)
    #[inline]
    pub fn height(&self) -> i32 {
        height(self.root())
    }

    /// Active configuration
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Rotation counters
    pub fn stats(&self) -> &RotationStats {
        &self.stats
    }

    /// Smallest key
    pub fn first(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some(node.key())
    }

    /// Largest key
    pub fn last(&self) -> Option<&K> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some(node.key())
    }

    /// Keys in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root(), self.len)
    }

    /// Nodes in breadth-first order
    pub fn levels(&self) -> Levels<'_, K> {
        Levels::new(self.root())
    }

    /// Drop every node; configuration and statistics are kept
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }
}

impl<K: Ord> AvlTree<K> {
    /// Insert `key`
    ///
    /// Returns `Ok(true)` if a node was added, `Ok(false)` if the key was
    /// already present under [`DuplicatePolicy::Ignore`]. On `Err` the tree
    /// is unchanged.
    pub fn insert(&mut self, key: K) -> Result<bool, TreeError> {
        if self.config.is_full(self.len) && !self.contains(&key) {
            let capacity = self.config.capacity.unwrap_or(self.len);
            tracing::debug!(capacity, "insert rejected: tree is full");
            return Err(TreeError::CapacityExceeded { capacity });
        }

        let track = self.config.track_rotations;
        let stats = &mut self.stats;
        let mut fired = 0u32;
        let (root, outcome) = insert::insert_with(key, self.root.take(), &mut |kind: Rotation| {
            fired += 1;
            if track {
                stats.record_rotation(kind);
            }
        });
        self.root = Some(root);

        match outcome {
            Outcome::Inserted => {
                self.len += 1;
                if track {
                    self.stats.record_insert(fired);
                }
                Ok(true)
            }
            Outcome::Duplicate(_) => {
                if track {
                    self.stats.record_duplicate();
                }
                match self.config.duplicate_policy {
                    DuplicatePolicy::Ignore => {
                        tracing::debug!("duplicate key ignored");
                        Ok(false)
                    }
                    DuplicatePolicy::Reject => {
                        tracing::debug!("duplicate key rejected");
                        Err(TreeError::DuplicateKey)
                    }
                }
            }
        }
    }

    /// Stored key equal to `key`
    pub fn get(&self, key: &K) -> Option<&K> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match key.cmp(n.key()) {
                Ordering::Less => n.left(),
                Ordering::Greater => n.right(),
                Ordering::Equal => return Some(n.key()),
            };
        }
        None
    }

    /// True if an equal key is stored
    pub fn contains(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Recheck every invariant from scratch
    pub fn validate(&self) -> Result<TreeSummary, InvariantViolation> {
        validate::validate(self.root())
    }

    /// Every node has balance factor in {-1, 0, 1} (and the tree is sound)
    pub fn is_balanced(&self) -> bool {
        self.validate().is_ok()
    }
}

impl<K> Default for AvlTree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord> FromIterator<K> for AvlTree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord> Extend<K> for AvlTree<K> {
    /// Duplicates are skipped; a full tree stops taking keys
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            match self.insert(key) {
                Ok(_) | Err(TreeError::DuplicateKey) => {}
                Err(_) => break,
            }
        }
    }
}

impl<'a, K> IntoIterator for &'a AvlTree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tree() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.is_balanced());
        assert_eq!(tree.first(), None);
        assert_eq!(tree.last(), None);
    }

    #[test]
    fn test_single_key() {
        let mut tree = AvlTree::new();
        assert_eq!(tree.insert("1").ok(), Some(true));
        assert!(!tree.is_empty());
        assert_eq!(tree.root().map(Node::key), Some(&"1"));
        assert_eq!(tree.height(), 0);
        assert!(tree.contains(&"1"));
        assert!(!tree.contains(&"asdf"));
    }

    #[test]
    fn test_double_rotation_root() {
        let tree: AvlTree<i32> = [1, 3, 2].into_iter().collect();
        let root = tree.root().expect("non-empty");
        assert_eq!(*root.key(), 2);
        assert_eq!(root.left().map(Node::key), Some(&1));
        assert_eq!(root.right().map(Node::key), Some(&3));
        assert_eq!(tree.stats().count(Rotation::RightLeft), 1);
    }

    #[test]
    fn test_min_max_and_get() {
        let tree: AvlTree<i32> = [1, 5, 3, 6, 4, 7, 9, 8].into_iter().collect();
        assert_eq!(tree.first(), Some(&1));
        assert_eq!(tree.last(), Some(&9));
        assert_eq!(tree.get(&6), Some(&6));
        assert_eq!(tree.get(&2), None);
        assert!(tree.is_balanced());
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_duplicate_policies() {
        let mut tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
        assert_eq!(tree.insert(2).ok(), Some(false));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.stats().duplicates(), 1);

        let config = TreeConfig::new().with_duplicate_policy(DuplicatePolicy::Reject);
        let mut strict = AvlTree::with_config(config).expect("valid config");
        strict.insert(2).expect("first insert");
        assert!(matches!(strict.insert(2), Err(TreeError::DuplicateKey)));
        assert_eq!(strict.len(), 1);
    }

    #[test]
    fn test_capacity_limit() {
        let mut tree = AvlTree::with_config(TreeConfig::new().with_capacity(2)).expect("valid config");
        tree.insert(10).expect("room");
        tree.insert(20).expect("room");
        assert!(matches!(
            tree.insert(30),
            Err(TreeError::CapacityExceeded { capacity: 2 })
        ));
        // Existing keys still resolve under the duplicate policy
        assert_eq!(tree.insert(10).ok(), Some(false));
        assert_eq!(tree.len(), 2);
        assert!(!tree.contains(&30));
    }

    #[test]
    fn test_invalid_config() {
        let result = AvlTree::<i32>::with_config(TreeConfig::new().with_capacity(0));
        assert!(matches!(result, Err(TreeError::InvalidConfig(_))));
    }

    #[test]
    fn test_tracking_disabled() {
        let config = TreeConfig::new().with_rotation_tracking(false);
        let mut tree = AvlTree::with_config(config).expect("valid config");
        for key in 0..32 {
            tree.insert(key).expect("insert");
        }
        assert_eq!(tree.len(), 32);
        assert_eq!(tree.stats(), &RotationStats::default());
    }

    #[test]
    fn test_clear_keeps_config() {
        let config = TreeConfig::new().with_capacity(4);
        let mut tree = AvlTree::with_config(config.clone()).expect("valid config");
        tree.extend([1, 2, 3, 4, 5]);
        assert_eq!(tree.len(), 4);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.config(), &config);
    }
}
