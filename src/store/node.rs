//! AVL tree nodes and rotations
//!
//! Each node exclusively owns its children. Dropping the root releases
//! the whole tree.

use crate::record::Record;

use super::fold::FoldedKey;

/// An owned, possibly absent subtree
pub(crate) type Link = Option<Box<Node>>;

/// A tree node holding one record
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) record: Record,
    pub(crate) folded: FoldedKey,
    pub(crate) height: u32,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Creates a leaf (height 1)
    pub(crate) fn leaf(record: Record, folded: FoldedKey) -> Box<Self> {
        Box::new(Self {
            record,
            folded,
            height: 1,
            left: None,
            right: None,
        })
    }

    /// Recomputes height from the children
    pub(crate) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height
    pub(crate) fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

/// Height of a subtree, 0 when absent
pub(crate) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn balance_factor(link: &Link) -> i64 {
    link.as_ref().map_or(0, |node| node.balance_factor())
}

/// Rotates `node` right: its left child becomes the subtree root.
///
/// The old root's height is recomputed before the pivot's. Returns `node`
/// unchanged if it has no left child.
pub(crate) fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = match node.left.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

/// Rotates `node` left: its right child becomes the subtree root.
pub(crate) fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let mut pivot = match node.right.take() {
        Some(pivot) => pivot,
        None => return node,
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restores the balance bound at `node` after one of its subtrees grew.
///
/// Returns the new subtree root and the number of rotations performed
/// (0, 1 or 2).
pub(crate) fn rebalance(mut node: Box<Node>) -> (Box<Node>, u64) {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        let mut rotations = 1;
        // Left-right case
        if balance_factor(&node.left) < 0 {
            node.left = node.left.take().map(rotate_left);
            rotations += 1;
        }
        return (rotate_right(node), rotations);
    }

    if balance < -1 {
        let mut rotations = 1;
        // Right-left case
        if balance_factor(&node.right) > 0 {
            node.right = node.right.take().map(rotate_right);
            rotations += 1;
        }
        return (rotate_left(node), rotations);
    }

    (node, 0)
}
