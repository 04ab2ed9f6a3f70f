//! Insert algorithm: recursive descent with rebalance-on-return
//!
//! Each call consumes the subtree root and hands back the (possibly new)
//! root, so a rotation anywhere below is visible to the caller simply by
//! storing the returned value.

use std::cmp::Ordering;

use super::node::{Link, Node};
use super::rotation::{self, Rotation};

/// What an insertion did with its key
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<K> {
    /// A new leaf now holds the key
    Inserted,

    /// An equal key was already present; the tree is unchanged and the
    /// rejected key is handed back
    Duplicate(K),
}

impl<K> Outcome<K> {
    /// True when a node was added
    pub fn is_inserted(&self) -> bool {
        matches!(self, Outcome::Inserted)
    }
}

/// Insert `key` below `root` and return the new subtree root
///
/// An equal key leaves the tree untouched.
pub fn insert<K: Ord>(key: K, root: Link<K>) -> Box<Node<K>> {
    insert_with(key, root, &mut |_: Rotation| {}).0
}

/// Insert `key`, reporting the outcome and every rotation that fired
pub fn insert_with<K, F>(key: K, root: Link<K>, on_rotate: &mut F) -> (Box<Node<K>>, Outcome<K>)
where
    K: Ord,
    F: FnMut(Rotation),
{
    let Some(mut node) = root else {
        return (Box::new(Node::leaf(key)), Outcome::Inserted);
    };

    let outcome = match key.cmp(&node.key) {
        Ordering::Less => {
            // Decided before descending: if the left subtree ends up two taller,
            // no rotation fired below, so `node.left` is still the same node.
            let went = node.left.as_ref().map(|left| key.cmp(&left.key));
            let (left, outcome) = insert_with(key, node.left.take(), on_rotate);
            node.left = Some(left);

            if node.balance_factor() == 2 {
                let kind = match went {
                    Some(Ordering::Less) => Rotation::Right,
                    _ => Rotation::LeftRight,
                };
                on_rotate(kind);
                return (rotation::apply(kind, node), outcome);
            }
            outcome
        }
        Ordering::Greater => {
            let went = node.right.as_ref().map(|right| key.cmp(&right.key));
            let (right, outcome) = insert_with(key, node.right.take(), on_rotate);
            node.right = Some(right);

            if node.balance_factor() == -2 {
                let kind = match went {
                    Some(Ordering::Greater) => Rotation::Left,
                    _ => Rotation::RightLeft,
                };
                on_rotate(kind);
                return (rotation::apply(kind, node), outcome);
            }
            outcome
        }
        Ordering::Equal => return (node, Outcome::Duplicate(key)),
    };

    // No rotation here, but a child may have grown
    node.update_height();
    (node, outcome)
}
