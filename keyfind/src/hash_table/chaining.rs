use std::{
    fmt,
    num::NonZeroUsize,
};

use crate::{
    Key,
    KeySet,
    LinkedList,
    Result,
    hash_table::{
        DEFAULT_CAPACITY,
        home_slot,
    },
};

/// A separate-chaining hash table with a fixed number of buckets.
///
/// Each bucket is a [`LinkedList`]; a key lives in bucket
/// `key mod bucket_count`. Inserting never fails and never deduplicates:
/// inserting a key twice stores two copies.
///
/// # Time Complexity
/// - Insert: O(1)
/// - Find: O(1 + load factor) expected, O(n) if every key collides
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use keyfind::HashTableChaining;
///
/// let mut table = HashTableChaining::new(NonZeroUsize::new(7).unwrap());
/// table.insert(3);
/// table.insert(10);
/// table.insert(-4);
///
/// assert_eq!(table.bucket_len(3), Some(3));
/// assert_eq!(table.find(10), Some(10));
/// assert_eq!(table.find(17), None);
/// ```
#[derive(Debug, Clone)]
pub struct HashTableChaining {
    buckets: Box<[LinkedList<Key>]>,
    len: usize,
}

impl Default for HashTableChaining {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HashTableChaining {
    /// Creates a table with `bucket_count` empty buckets.
    pub fn new(bucket_count: NonZeroUsize) -> Self {
        HashTableChaining {
            buckets: (0..bucket_count.get()).map(|_| LinkedList::new()).collect(),
            len: 0,
        }
    }

    /// Appends `key` to its bucket.
    pub fn insert(&mut self, key: Key) {
        let bucket = home_slot(key, self.buckets.len());
        self.buckets[bucket].append(key);
        self.len += 1;
    }

    /// Returns `key` if it is stored, scanning only its bucket.
    pub fn find(&self, key: Key) -> Option<Key> {
        let bucket = home_slot(key, self.buckets.len());
        self.buckets[bucket].find(&key).copied()
    }

    /// Returns `true` if `key` is stored.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Total number of stored keys across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no key is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of keys in bucket `index`, or `None` past the last bucket.
    pub fn bucket_len(&self, index: usize) -> Option<usize> {
        self.buckets.get(index).map(LinkedList::len)
    }

    /// The bucket at `index`, or `None` past the last bucket.
    pub fn bucket(&self, index: usize) -> Option<&LinkedList<Key>> {
        self.buckets.get(index)
    }

    /// All stored keys, bucket by bucket in insertion order within each
    /// bucket.
    pub fn iter(&self) -> impl Iterator<Item = Key> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter().copied())
    }

    #[doc(hidden)]
    #[cfg(any(test, feature = "internal-debugging"))]
    pub fn debug_validate(&self) {
        let mut total = 0;
        for (index, bucket) in self.buckets.iter().enumerate() {
            bucket.debug_validate();
            for key in bucket {
                assert_eq!(
                    home_slot(*key, self.buckets.len()),
                    index,
                    "Key {key} stored in the wrong bucket"
                );
            }
            total += bucket.len();
        }
        assert_eq!(total, self.len, "Bucket sizes must add up to len");
    }
}

impl fmt::Display for HashTableChaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, bucket) in self.buckets.iter().enumerate() {
            writeln!(f, "bucket {index}: {}: {bucket}", bucket.len())?;
        }
        Ok(())
    }
}

impl KeySet for HashTableChaining {
    fn insert_key(&mut self, key: Key) -> Result<()> {
        self.insert(key);
        Ok(())
    }

    fn find_key(&self, key: Key) -> Option<Key> {
        self.find(key)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl Extend<Key> for HashTableChaining {
    fn extend<I: IntoIterator<Item = Key>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}
