//! Binary search trees over owned, boxed nodes.
//!
//! Both trees share one node type and every read-only operation. They differ
//! only in how `insert` reshapes the tree: [`BinarySearchTree`] never
//! rebalances, [`AvlTree`] rotates on the way back up.
//!
//! Keys that compare less than a node descend left, every other key
//! (including an equal one) descends right. Heights follow the convention
//! height(empty) = -1 and height(leaf) = 0.

mod avl;
mod bst;

use std::{
    cmp::Ordering,
    fmt,
};

pub use avl::AvlTree;
pub use bst::BinarySearchTree;

type Link<T> = Option<Box<TreeNode<T>>>;

#[derive(Debug, Clone)]
struct TreeNode<T> {
    key: T,
    height: i32,
    left: Link<T>,
    right: Link<T>,
}

impl<T> TreeNode<T> {
    fn leaf(key: T) -> Box<Self> {
        Box::new(TreeNode {
            key,
            height: 0,
            left: None,
            right: None,
        })
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance_factor(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height<T>(link: &Link<T>) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

fn key_of<T>(link: &Link<T>) -> Option<&T> {
    link.as_ref().map(|node| &node.key)
}

fn find<'a, T: Ord>(mut link: &'a Link<T>, target: &T) -> Option<&'a T> {
    while let Some(node) = link {
        link = match target.cmp(&node.key) {
            Ordering::Equal => return Some(&node.key),
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
        };
    }
    None
}

fn min_value<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(left) = node.left.as_deref() {
        node = left;
    }
    Some(&node.key)
}

fn max_value<T>(link: &Link<T>) -> Option<&T> {
    let mut node = link.as_deref()?;
    while let Some(right) = node.right.as_deref() {
        node = right;
    }
    Some(&node.key)
}

/// Drops a subtree without recursing, so degenerate (list-shaped) trees do
/// not exhaust the stack.
fn drop_iteratively<T>(link: &mut Link<T>) {
    let mut stack: Vec<Box<TreeNode<T>>> = link.take().into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.left.take());
        stack.extend(node.right.take());
    }
}

/// Deep-copies a subtree without recursing. Nodes are rebuilt in postorder,
/// so each parent takes its finished children off the `built` stack.
fn clone_iteratively<T: Clone>(link: &Link<T>) -> Link<T> {
    let mut pending: Vec<(&TreeNode<T>, bool)> = link
        .as_deref()
        .map(|node| (node, false))
        .into_iter()
        .collect();
    let mut built: Vec<Box<TreeNode<T>>> = Vec::new();
    while let Some((node, children_built)) = pending.pop() {
        if children_built {
            // The right child is pushed last, so it is built first and sits
            // below the left child.
            let left = node.left.as_ref().and_then(|_| built.pop());
            let right = node.right.as_ref().and_then(|_| built.pop());
            built.push(Box::new(TreeNode {
                key: node.key.clone(),
                height: node.height,
                left,
                right,
            }));
        } else {
            pending.push((node, true));
            pending.extend(node.left.as_deref().map(|left| (left, false)));
            pending.extend(node.right.as_deref().map(|right| (right, false)));
        }
    }
    built.pop()
}

/// Depth-first visiting order used by [`BinarySearchTree::traverse`] and
/// [`AvlTree::traverse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    /// Node, then left subtree, then right subtree.
    Preorder,
    /// Left subtree, then node, then right subtree. Yields keys in sorted
    /// order.
    Inorder,
    /// Left subtree, then right subtree, then node.
    Postorder,
}

fn traverse<T>(link: &Link<T>, order: Traversal) -> Vec<&T> {
    let mut out = Vec::new();
    let mut stack: Vec<&TreeNode<T>> = Vec::new();

    match order {
        Traversal::Preorder => {
            stack.extend(link.as_deref());
            while let Some(node) = stack.pop() {
                out.push(&node.key);
                stack.extend(node.right.as_deref());
                stack.extend(node.left.as_deref());
            }
        }
        Traversal::Inorder => {
            let mut current = link.as_deref();
            loop {
                while let Some(node) = current {
                    stack.push(node);
                    current = node.left.as_deref();
                }
                let Some(node) = stack.pop() else {
                    break;
                };
                out.push(&node.key);
                current = node.right.as_deref();
            }
        }
        Traversal::Postorder => {
            // Node, right, left reversed is left, right, node.
            stack.extend(link.as_deref());
            while let Some(node) = stack.pop() {
                out.push(&node.key);
                stack.extend(node.left.as_deref());
                stack.extend(node.right.as_deref());
            }
            out.reverse();
        }
    }

    out
}

fn write_inorder<T: fmt::Display>(link: &Link<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, key) in traverse(link, Traversal::Inorder).into_iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{key}")?;
    }
    Ok(())
}

#[cfg(any(test, feature = "internal-debugging"))]
fn validate_tree<T: Ord + fmt::Debug>(link: &Link<T>, len: usize, balanced: bool) {
    assert_eq!(validate(link, balanced), len, "Node count must match len");

    let sorted = traverse(link, Traversal::Inorder);
    assert!(
        sorted.windows(2).all(|pair| pair[0] <= pair[1]),
        "In-order traversal is not sorted: {sorted:?}"
    );
}

/// Checks cached heights and child ordering below `link` and returns the
/// number of nodes. With `balanced` set, also checks the AVL balance
/// condition at every node.
#[cfg(any(test, feature = "internal-debugging"))]
fn validate<T: Ord + fmt::Debug>(link: &Link<T>, balanced: bool) -> usize {
    let Some(node) = link else {
        return 0;
    };

    if let Some(left) = key_of(&node.left) {
        assert!(
            left <= &node.key,
            "Left child {left:?} is greater than {:?}",
            node.key
        );
    }
    if let Some(right) = key_of(&node.right) {
        assert!(
            right >= &node.key,
            "Right child {right:?} is less than {:?}",
            node.key
        );
    }
    assert_eq!(
        node.height,
        1 + height(&node.left).max(height(&node.right)),
        "Stale height at {:?}",
        node.key
    );
    if balanced {
        assert!(
            node.balance_factor().abs() <= 1,
            "Unbalanced node {:?}: balance factor {}",
            node.key,
            node.balance_factor()
        );
    }

    1 + validate(&node.left, balanced) + validate(&node.right, balanced)
}

/// True if every node satisfies |height(left) - height(right)| <= 1 and
/// carries the height its children imply.
fn is_balanced<T>(link: &Link<T>) -> bool {
    match link {
        None => true,
        Some(node) => {
            node.balance_factor().abs() <= 1
                && node.height == 1 + height(&node.left).max(height(&node.right))
                && is_balanced(&node.left)
                && is_balanced(&node.right)
        }
    }
}
