//! Tree node representation
//!
//! Node = key + two exclusively owned subtrees + cached height
//! Height convention: absent = -1, leaf = 0
//!   height(t) = 1 + max(height(t.left), height(t.right))

use std::fmt;

/// Owned, possibly absent subtree
pub type Link<K> = Option<Box<Node<K>>>;

/// Height of an absent subtree
pub const EMPTY_HEIGHT: i32 = -1;

/// Single tree vertex
///
/// No parent link is stored: ownership is strictly top-down,
/// so the only way to reach a node is through its unique parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Link<K>,
    pub(crate) right: Link<K>,
    pub(crate) height: i32,
}

impl<K> Node<K> {
    /// Create a leaf (height 0)
    pub fn leaf(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
            height: 0,
        }
    }

    /// Key stored at this node
    #[inline]
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Left subtree, if any
    #[inline]
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    /// Right subtree, if any
    #[inline]
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    /// Cached height of the subtree rooted here
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Check if leaf (no children)
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// height(left) - height(right), from cached heights only
    #[inline]
    pub fn balance_factor(&self) -> i32 {
        height(self.left()) - height(self.right())
    }

    /// Refresh the cached height from the children's cached heights
    ///
    /// Must run after every change to `left` or `right`, children first.
    #[inline]
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(self.left()).max(height(self.right()));
    }
}

/// Height of a possibly absent node
///
/// Trusts the cache: O(1), never walks the subtree.
#[inline]
pub fn height<K>(node: Option<&Node<K>>) -> i32 {
    node.map_or(EMPTY_HEIGHT, |n| n.height)
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} h={}]", self.key, self.height)
    }
}
