use std::fmt;

use crate::{
    Key,
    KeySet,
    Result,
    tree::{
        Link,
        TreeNode,
        Traversal,
        clone_iteratively,
        drop_iteratively,
        find,
        height,
        max_value,
        min_value,
        traverse,
        write_inorder,
    },
};

/// An unbalanced binary search tree.
///
/// Insertion order dictates the shape: sorted input degenerates into a
/// list-shaped tree of height `n - 1`. Every operation is therefore
/// O(height), which is O(log n) for random input and O(n) in the worst case.
/// Insertion, traversal, clone and drop are iterative, so degenerate trees
/// are safe to build.
///
/// # Examples
///
/// ```
/// use keyfind::BinarySearchTree;
///
/// let mut tree = BinarySearchTree::new();
/// for key in [101, 50, 250, 42, 31, 315, 200] {
///     tree.insert(key);
/// }
///
/// assert_eq!(tree.find(&200), Some(&200));
/// assert_eq!(tree.find(&100), None);
/// assert_eq!(tree.min_value(), Some(&31));
/// assert_eq!(tree.max_value(), Some(&315));
/// assert_eq!(tree.to_string(), "31 42 50 101 200 250 315");
/// ```
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        BinarySearchTree {
            root: clone_iteratively(&self.root),
            len: self.len,
        }
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        drop_iteratively(&mut self.root);
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        BinarySearchTree { root: None, len: 0 }
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

impl<T: Ord> BinarySearchTree<T> {
    /// Inserts `key`. Keys less than a node go left, all others go right, so
    /// duplicates are kept and land to the right of their equal.
    pub fn insert(&mut self, key: T) {
        // The new leaf's depth decides how tall each ancestor becomes.
        let mut depth = 0;
        let mut link = &self.root;
        while let Some(node) = link {
            depth += 1;
            link = if key < node.key {
                &node.left
            } else {
                &node.right
            };
        }

        let mut level = 0;
        let mut link = &mut self.root;
        while let Some(node) = link {
            node.height = node.height.max(depth - level);
            level += 1;
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *link = Some(TreeNode::leaf(key));
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

impl<T: Ord + fmt::Debug> BinarySearchTree<T> {
    #[doc(hidden)]
    #[cfg(any(test, feature = "internal-debugging"))]
    pub fn debug_validate(&self) {
        crate::tree::validate_tree(&self.root, self.len, false);
    }
}

impl KeySet for BinarySearchTree<Key> {
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

impl<T: fmt::Debug> fmt::Debug for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinarySearchTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .field("keys", &self.inorder())
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for BinarySearchTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_inorder(&self.root, f)
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
