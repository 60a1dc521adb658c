//! Fixed-size hash tables over integer keys.
//!
//! Both tables hash with `key mod capacity` and never resize. Capacities
//! should be prime and comfortably larger than the number of keys; neither
//! table checks this.

mod chaining;
mod probing;

use std::num::NonZeroUsize;

pub use chaining::HashTableChaining;
pub use probing::HashTableProbing;

use crate::Key;

/// Bucket or slot count used by `Default` and by the driver.
pub const DEFAULT_CAPACITY: NonZeroUsize = NonZeroUsize::new(101).unwrap();

/// Euclidean `key mod slots`, always in `0..slots` even for negative keys.
fn home_slot(key: Key, slots: usize) -> usize {
    // Widen so that neither operand can overflow or truncate.
    (i128::from(key).rem_euclid(slots as i128)) as usize
}
