#![doc = include_str!("../../README.md")]
#![deny(missing_docs)]

#[cfg(feature = "rand")]
pub mod dataset;
pub mod driver;
mod error;
mod hash_table;
mod linked_list;
mod tree;

pub use error::{
    Error,
    Result,
};
pub use hash_table::{
    DEFAULT_CAPACITY,
    HashTableChaining,
    HashTableProbing,
};
pub use linked_list::{
    IntoIter,
    Iter,
    LinkedList,
};
pub use tree::{
    AvlTree,
    BinarySearchTree,
    Traversal,
};

/// The integer key type stored by every structure in this crate.
pub type Key = i64;

/// A structure that stores integer keys and answers membership queries.
///
/// Every structure in this crate implements `KeySet` for [`Key`], so a
/// driver can pick one at runtime and treat it as `Box<dyn KeySet>`. The
/// inherent `insert`/`find` methods remain the primary API; this trait only
/// unifies their signatures.
///
/// # Examples
///
/// ```
/// use keyfind::{
///     AvlTree,
///     HashTableProbing,
///     KeySet,
///     LinkedList,
/// };
///
/// let mut sets: Vec<Box<dyn KeySet>> = vec![
///     Box::new(LinkedList::new()),
///     Box::new(AvlTree::new()),
///     Box::new(HashTableProbing::default()),
/// ];
///
/// for set in &mut sets {
///     set.insert_key(42)?;
///     assert_eq!(set.find_key(42), Some(42));
///     assert_eq!(set.find_key(7), None);
///     assert_eq!(set.len(), 1);
/// }
/// # Ok::<(), keyfind::Error>(())
/// ```
pub trait KeySet {
    /// Stores `key`.
    ///
    /// # Errors
    /// Only fixed-capacity structures fail, with [`Error::TableFull`].
    fn insert_key(&mut self, key: Key) -> Result<()>;

    /// Returns the stored key equal to `key`, or `None`.
    fn find_key(&self, key: Key) -> Option<Key>;

    /// Number of stored keys, duplicates included.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
