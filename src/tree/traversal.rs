//! Read-only traversals
//!
//! In-order: explicit stack of O(height) = O(log n) node references.
//! Level-order: FIFO queue, used by the renderers.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::node::Node;

/// Which link led to a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The tree root (no parent)
    Root,

    /// Reached through a parent's left link
    Left,

    /// Reached through a parent's right link
    Right,
}

impl Side {
    /// Short label used in dumps
    pub fn label(self) -> &'static str {
        match self {
            Side::Root => "Root",
            Side::Left => "L",
            Side::Right => "R",
        }
    }
}

/// In-order iterator over keys (ascending)
#[derive(Debug)]
pub struct Iter<'a, K> {
    /// Left spine still to visit; top = next key
    stack: Vec<&'a Node<K>>,

    /// Keys not yet yielded
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}
impl<K> FusedIterator for Iter<'_, K> {}

/// One node as seen by a level-order walk
#[derive(Debug, Clone, Copy)]
pub struct LevelEntry<'a, K> {
    /// The node itself
    pub node: &'a Node<K>,

    /// Distance from the root (root = 0)
    pub depth: usize,

    /// Link that led here
    pub side: Side,
}

/// Breadth-first iterator, left to right within a level
#[derive(Debug)]
pub struct Levels<'a, K> {
    queue: VecDeque<LevelEntry<'a, K>>,
}

impl<'a, K> Levels<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut queue = VecDeque::new();
        if let Some(node) = root {
            queue.push_back(LevelEntry {
                node,
                depth: 0,
                side: Side::Root,
            });
        }
        Self { queue }
    }
}

impl<'a, K> Iterator for Levels<'a, K> {
    type Item = LevelEntry<'a, K>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.queue.pop_front()?;
        let children = [(entry.node.left(), Side::Left), (entry.node.right(), Side::Right)];
        for (child, side) in children {
            if let Some(node) = child {
                self.queue.push_back(LevelEntry {
                    node,
                    depth: entry.depth + 1,
                    side,
                });
            }
        }
        Some(entry)
    }
}

impl<K> FusedIterator for Levels<'_, K> {}
