//! Rotation primitives
//!
//! Each rotation consumes a locally unbalanced subtree root and returns the
//! new subtree root. Only the 2-3 nodes involved are touched; no recursion.
//!
//! ```text
//!   rotate_right(t):          rotate_left(t):
//!
//!         t          L          t              R
//!        / \        / \        / \            / \
//!       L   c  =>  a   t      a   R    =>    t   c
//!      / \            / \        / \        / \
//!     a   b          b   c      b   c      a   b
//! ```

use std::fmt;

use super::node::Node;

/// Which rotation fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rotation {
    /// Single left rotation (right-right case)
    Left,

    /// Single right rotation (left-left case)
    Right,

    /// Left on the left child, then right (left-right case)
    LeftRight,

    /// Right on the right child, then left (right-left case)
    RightLeft,
}

impl Rotation {
    /// All rotation kinds, in a fixed order
    pub const ALL: [Rotation; 4] = [
        Rotation::Left,
        Rotation::Right,
        Rotation::LeftRight,
        Rotation::RightLeft,
    ];

    /// Double rotations compose two single rotations
    pub fn is_double(self) -> bool {
        matches!(self, Rotation::LeftRight | Rotation::RightLeft)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Rotation::Left => 0,
            Rotation::Right => 1,
            Rotation::LeftRight => 2,
            Rotation::RightLeft => 3,
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rotation::Left => "left",
            Rotation::Right => "right",
            Rotation::LeftRight => "left-right",
            Rotation::RightLeft => "right-left",
        };
        f.write_str(name)
    }
}

/// Fix a left-left imbalance
///
/// `t.left` becomes the root; its former right subtree moves under `t`.
/// Without a left child there is nothing to rotate and `t` is returned as is.
pub fn rotate_right<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut l) = t.left.take() else {
        debug_assert!(false, "rotate_right requires a left child");
        return t;
    };
    t.left = l.right.take();
    // Child before ancestor: l's height depends on t's
    t.update_height();
    l.right = Some(t);
    l.update_height();
    tracing::trace!(rotation = %Rotation::Right, "rotated");
    l
}

/// Fix a right-right imbalance (mirror of [`rotate_right`])
pub fn rotate_left<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    let Some(mut r) = t.right.take() else {
        debug_assert!(false, "rotate_left requires a right child");
        return t;
    };
    t.right = r.left.take();
    t.update_height();
    r.left = Some(t);
    r.update_height();
    tracing::trace!(rotation = %Rotation::Left, "rotated");
    r
}

/// Fix a left-right imbalance
///
/// A single rotation cannot fix this shape; the left child is first rotated
/// left so the subtree becomes left-left, then `t` is rotated right.
pub fn rotate_left_right<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    t.left = t.left.take().map(rotate_left);
    rotate_right(t)
}

/// Fix a right-left imbalance (mirror of [`rotate_left_right`])
pub fn rotate_right_left<K>(mut t: Box<Node<K>>) -> Box<Node<K>> {
    t.right = t.right.take().map(rotate_right);
    rotate_left(t)
}

/// Apply the rotation named by `kind`
pub(crate) fn apply<K>(kind: Rotation, t: Box<Node<K>>) -> Box<Node<K>> {
    match kind {
        Rotation::Left => rotate_left(t),
        Rotation::Right => rotate_right(t),
        Rotation::LeftRight => rotate_left_right(t),
        Rotation::RightLeft => rotate_right_left(t),
    }
}
