use std::{
    fmt,
    num::NonZeroUsize,
};

use log::{
    debug,
    trace,
    warn,
};

use crate::{
    Error,
    Key,
    KeySet,
    Result,
    hash_table::{
        DEFAULT_CAPACITY,
        home_slot,
    },
};

/// Distance between consecutive probes.
const SKIP: usize = 1;

/// An open-addressing hash table with linear probing and a fixed number of
/// slots.
///
/// A key's home slot is `key mod capacity`. When the home slot is taken, the
/// table probes `home + 1`, `home + 2`, ... (wrapping) until it finds an
/// empty slot. A probe sequence that wraps back to the home slot means every
/// slot is taken and the insert fails with [`Error::TableFull`].
///
/// Linear probing clusters keys with nearby home slots; a prime capacity well
/// above the expected key count keeps probe sequences short.
///
/// # Time Complexity
/// - Insert/Find: O(1) expected at low load, O(capacity) worst case
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
///
/// use keyfind::{
///     Error,
///     HashTableProbing,
/// };
///
/// let mut table = HashTableProbing::new(NonZeroUsize::new(5).unwrap());
/// assert_eq!(table.insert(3)?, 3);
/// assert_eq!(table.insert(8)?, 4);
/// assert_eq!(table.insert(13)?, 0);
///
/// assert_eq!(table.find(13), Some(13));
/// assert_eq!(table.find(18), None);
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HashTableProbing {
    slots: Box<[Option<Key>]>,
    len: usize,
}

impl Default for HashTableProbing {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl HashTableProbing {
    /// Creates a table with `capacity` empty slots.
    pub fn new(capacity: NonZeroUsize) -> Self {
        HashTableProbing {
            slots: vec![None; capacity.get()].into_boxed_slice(),
            len: 0,
        }
    }

    /// Stores `key` in the first free slot of its probe sequence and returns
    /// that slot's index.
    ///
    /// Keys are not deduplicated; inserting a stored key takes another slot.
    ///
    /// # Errors
    /// [`Error::TableFull`] if the probe sequence returns to the home slot
    /// without finding an empty slot. The table is left unchanged.
    pub fn insert(&mut self, key: Key) -> Result<usize> {
        let home = home_slot(key, self.slots.len());
        for (probes, slot) in self.probe(home).enumerate() {
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(key);
                self.len += 1;
                if probes == 0 {
                    trace!("placed {key} in home slot {slot}");
                } else {
                    debug!("placed {key} in slot {slot} after {probes} probes from {home}");
                }
                return Ok(slot);
            }
        }

        warn!(
            "probing table with {} slots is full, rejecting {key}",
            self.capacity()
        );
        Err(Error::TableFull {
            capacity: self.capacity(),
        })
    }

    /// Returns `key` if it is stored.
    ///
    /// The search starts at the home slot and stops at the first empty slot
    /// or after one full cycle, so it always terminates.
    pub fn find(&self, key: Key) -> Option<Key> {
        let home = home_slot(key, self.slots.len());
        for slot in self.probe(home) {
            match self.slots[slot] {
                None => return None,
                Some(stored) if stored == key => return Some(stored),
                Some(_) => {}
            }
        }
        None
    }

    /// Returns `true` if `key` is stored.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    /// Number of slots, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// The key in slot `index`, or `None` if the slot is empty or past the
    /// end.
    pub fn slot(&self, index: usize) -> Option<Key> {
        self.slots.get(index).copied().flatten()
    }

    /// Every slot in index order.
    pub fn slots(&self) -> impl ExactSizeIterator<Item = Option<Key>> + '_ {
        self.slots.iter().copied()
    }

    fn probe(&self, home: usize) -> Probe {
        Probe {
            next: Some(home),
            home,
            capacity: self.slots.len(),
        }
    }

    #[doc(hidden)]
    #[cfg(any(test, feature = "internal-debugging"))]
    pub fn debug_validate(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len, "Occupied slots must match len");

        for (index, key) in self.slots.iter().enumerate() {
            let Some(key) = *key else {
                continue;
            };
            let home = home_slot(key, self.slots.len());
            for slot in self.probe(home) {
                if slot == index {
                    break;
                }
                assert!(
                    self.slots[slot].is_some(),
                    "Key {key} in slot {index} is unreachable: slot {slot} is empty"
                );
            }
        }
    }
}

/// Slot indices visited from a home slot: the home slot, then every
/// following slot (wrapping) until the sequence would return home.
#[derive(Debug)]
struct Probe {
    next: Option<usize>,
    home: usize,
    capacity: usize,
}

impl Iterator for Probe {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let slot = self.next?;
        let following = (slot + SKIP) % self.capacity;
        self.next = (following != self.home).then_some(following);
        Some(slot)
    }
}

impl fmt::Display for HashTableProbing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                Some(key) => writeln!(f, "bucket {index}: {key}")?,
                None => writeln!(f, "bucket {index}: None")?,
            }
        }
        Ok(())
    }
}

impl KeySet for HashTableProbing {
    fn insert_key(&mut self, key: Key) -> Result<()> {
        self.insert(key).map(|_| ())
    }

    fn find_key(&self, key: Key) -> Option<Key> {
        self.find(key)
    }

    fn len(&self) -> usize {
        self.len
    }
}
