use std::fmt;

use log::debug;

use crate::{
    Key,
    KeySet,
    Result,
    tree::{
        Link,
        TreeNode,
        Traversal,
        find,
        height,
        is_balanced,
        key_of,
        max_value,
        min_value,
        traverse,
        write_inorder,
    },
};

/// A height-balanced binary search tree.
///
/// After every insert, each node on the path back to the root checks whether
/// its subtrees differ in height by two or more and, if so, restores balance
/// with a single or double rotation. The height of a tree with `n` keys is
/// therefore bounded by roughly `1.44 * log2(n + 2)`.
///
/// Lookups, extrema and traversals are shared with [`BinarySearchTree`].
///
/// # Time Complexity
/// - Insert/Find/Min/Max: O(log n)
/// - Traversal: O(n)
///
/// # Examples
///
/// ```
/// use keyfind::AvlTree;
///
/// // Ascending input would degenerate a plain BST.
/// let tree: AvlTree<i32> = (1..=7).collect();
///
/// assert_eq!(tree.height(), 2);
/// assert!(tree.is_balanced());
/// assert_eq!(tree.find(&4), Some(&4));
/// assert_eq!(tree.to_string(), "1 2 3 4 5 6 7");
/// ```
///
/// [`BinarySearchTree`]: crate::BinarySearchTree
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AvlTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        AvlTree { root: None, len: 0 }
    }

    /// Returns the number of stored keys, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the root: -1 for an empty tree, 0 for a single node.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Returns `true` if every node's subtrees differ in height by at most
    /// one and every cached height is current.
    pub fn is_balanced(&self) -> bool {
        is_balanced(&self.root)
    }

    /// Smallest key, or `None` if the tree is empty.
    pub fn min_value(&self) -> Option<&T> {
        min_value(&self.root)
    }

    /// Largest key, or `None` if the tree is empty.
    pub fn max_value(&self) -> Option<&T> {
        max_value(&self.root)
    }

    /// Keys in the requested depth-first order.
    pub fn traverse(&self, order: Traversal) -> Vec<&T> {
        traverse(&self.root, order)
    }

    /// Keys in sorted (in-order) order.
    pub fn inorder(&self) -> Vec<&T> {
        self.traverse(Traversal::Inorder)
    }
}

impl<T: Ord> AvlTree<T> {
    /// Inserts `key` and rebalances the path back to the root.
    ///
    /// Duplicates are kept. Rotations may move an equal key into the left
    /// subtree of its twin; in-order traversal stays sorted regardless.
    pub fn insert(&mut self, key: T) {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
    }

    /// Returns the stored key equal to `key`, or `None`.
    pub fn find(&self, key: &T) -> Option<&T> {
        find(&self.root, key)
    }

    /// Returns `true` if a key equal to `key` is stored.
    pub fn contains(&self, key: &T) -> bool {
        self.find(key).is_some()
    }
}

fn is_unbalanced<T>(node: &TreeNode<T>) -> bool {
    node.balance_factor().abs() >= 2
}

/// Inserts `key` below `link` and returns the root of the resulting subtree,
/// which may differ from the node that was passed in.
fn insert<T: Ord>(link: Link<T>, key: T) -> Box<TreeNode<T>> {
    let Some(mut node) = link else {
        return TreeNode::leaf(key);
    };

    if key < node.key {
        // A rebalance here only happens when the left child itself did not
        // rotate, so comparing against it before descending is equivalent to
        // comparing after.
        let left_left = key_of(&node.left).is_some_and(|left| key < *left);
        node.left = Some(insert(node.left.take(), key));
        if is_unbalanced(&node) {
            if !left_left {
                node.left = node.left.take().map(rotate_with_right_child);
            }
            return rotate_with_left_child(node);
        }
    } else {
        let right_right = key_of(&node.right).is_some_and(|right| key >= *right);
        node.right = Some(insert(node.right.take(), key));
        if is_unbalanced(&node) {
            if !right_right {
                node.right = node.right.take().map(rotate_with_left_child);
            }
            return rotate_with_right_child(node);
        }
    }

    node.update_height();
    node
}

/// Promotes the left child. `node` keeps the promoted child's former right
/// subtree as its new left subtree and becomes the promoted child's right
/// child.
fn rotate_with_left_child<T>(mut node: Box<TreeNode<T>>) -> Box<TreeNode<T>> {
    let Some(mut promoted) = node.left.take() else {
        return node;
    };
    debug!("rotating with left child");

    node.left = promoted.right.take();
    node.update_height();
    promoted.right = Some(node);
    promoted.update_height();
    promoted
}

/// Mirror of [`rotate_with_left_child`].
fn rotate_with_right_child<T>(mut node: Box<TreeNode<T>>) -> Box<TreeNode<T>> {
    let Some(mut promoted) = node.right.take() else {
        return node;
    };
    debug!("rotating with right child");

    node.right = promoted.left.take();
    node.update_height();
    promoted.left = Some(node);
    promoted.update_height();
    promoted
}

impl<T: Ord + fmt::Debug> AvlTree<T> {
    #[doc(hidden)]
    #[cfg(any(test, feature = "internal-debugging"))]
    pub fn debug_validate(&self) {
        crate::tree::validate_tree(&self.root, self.len, true);
    }
}

impl KeySet for AvlTree<Key> {
    fn insert_key(&mut self, key: Key) -> Result<()> {
        self.insert(key);
        Ok(())
    }

    fn find_key(&self, key: Key) -> Option<Key> {
        self.find(&key).copied()
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AvlTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("keys", &self.inorder())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_inorder(&self.root, f)
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = AvlTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
