//! Random id datasets for insert-then-lookup runs.
//!
//! A dataset is a list of unique eight-digit ids to insert plus a lookup
//! list that holds every id once, interleaved with nine-digit false ids that
//! can never be found. There is one false id per [`FALSE_ID_DIVISOR`] real
//! ids.

use std::{
    collections::HashSet,
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    ops::RangeInclusive,
    path::Path,
};

use log::{
    info,
    warn,
};
use rand::Rng;

use crate::{
    Key,
    Result,
    driver::DatasetSize,
};

/// Range of real ids.
pub const ID_RANGE: RangeInclusive<Key> = 10_000_000..=99_999_999;

/// Range of false ids, disjoint from [`ID_RANGE`].
pub const FALSE_ID_RANGE: RangeInclusive<Key> = 100_000_000..=999_999_999;

/// Real ids per false id.
pub const FALSE_ID_DIVISOR: usize = 100;

/// Ids to insert and ids to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    /// Unique real ids, in generation order.
    pub ids: Vec<Key>,
    /// Every real id plus the false ids, in lookup order.
    pub lookups: Vec<Key>,
}

impl Dataset {
    /// Generates `id_count` real ids and the matching lookup list.
    ///
    /// # Examples
    ///
    /// ```
    /// use keyfind::dataset::Dataset;
    /// use rand::{
    ///     SeedableRng,
    ///     rngs::StdRng,
    /// };
    ///
    /// let dataset = Dataset::generate(&mut StdRng::seed_from_u64(7), 1_000);
    /// assert_eq!(dataset.ids.len(), 1_000);
    /// assert_eq!(dataset.lookups.len(), 1_010);
    /// ```
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, id_count: usize) -> Self {
        let ids = generate_ids(rng, id_count);
        let false_ids = generate_false_ids(rng, id_count);
        let lookups = merge_lookups(rng, &ids, &false_ids);
        Dataset { ids, lookups }
    }

    /// Writes the ids and lookups into `dir` under the file names of `size`.
    pub fn write_to_dir<P: AsRef<Path>>(&self, dir: P, size: DatasetSize) -> Result<()> {
        let dir = dir.as_ref();
        for (name, keys) in [
            (size.ids_file_name(), &self.ids),
            (size.lookups_file_name(), &self.lookups),
        ] {
            let path = dir.join(name);
            let mut writer = BufWriter::new(File::create(&path)?);
            write_keys(&mut writer, keys)?;
            writer.flush()?;
            info!("wrote {} keys to {}", keys.len(), path.display());
        }
        Ok(())
    }
}

/// Draws `count` distinct keys uniformly from `range`, or every key of the
/// range (in random order) if it holds fewer than `count`.
fn unique_keys<R: Rng + ?Sized>(
    rng: &mut R,
    range: RangeInclusive<Key>,
    count: usize,
) -> Vec<Key> {
    let available = (i128::from(*range.end()) - i128::from(*range.start()) + 1).max(0);
    let available = usize::try_from(available).unwrap_or(usize::MAX);
    if count > available {
        warn!("{range:?} holds only {available} keys, {count} were requested");
    }
    let count = count.min(available);

    let mut seen = HashSet::with_capacity(count);
    let mut keys = Vec::with_capacity(count);
    while keys.len() < count {
        let key = rng.random_range(range.clone());
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys
}

/// `count` unique ids from [`ID_RANGE`].
///
/// At most the size of the range (90,000,000 ids) is returned.
pub fn generate_ids<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Key> {
    unique_keys(rng, ID_RANGE, count)
}

/// One unique id from [`FALSE_ID_RANGE`] per [`FALSE_ID_DIVISOR`] of
/// `id_count`, rounded down. At most the size of the range is returned.
pub fn generate_false_ids<R: Rng + ?Sized>(rng: &mut R, id_count: usize) -> Vec<Key> {
    unique_keys(rng, FALSE_ID_RANGE, id_count / FALSE_ID_DIVISOR)
}

/// Interleaves `false_ids` into `ids`.
///
/// `ids` is cut into runs of `ids.len() / false_ids.len()` keys and each run
/// receives one false id at a random position within it. Ids left over once
/// the false ids run out are appended in order. Every key of both inputs
/// appears exactly once and each input keeps its relative order.
pub fn merge_lookups<R: Rng + ?Sized>(
    rng: &mut R,
    ids: &[Key],
    false_ids: &[Key],
) -> Vec<Key> {
    let mut merged = Vec::with_capacity(ids.len() + false_ids.len());
    if false_ids.is_empty() {
        merged.extend_from_slice(ids);
        return merged;
    }

    let interval = ids.len() / false_ids.len();
    let mut rest = ids;
    for &false_id in false_ids {
        let (run, tail) = rest.split_at(interval.min(rest.len()));
        let position = rng.random_range(0..=run.len());
        merged.extend_from_slice(&run[..position]);
        merged.push(false_id);
        merged.extend_from_slice(&run[position..]);
        rest = tail;
    }
    merged.extend_from_slice(rest);
    merged
}

/// Writes one key per line.
pub fn write_keys<W: Write>(writer: &mut W, keys: &[Key]) -> Result<()> {
    for key in keys {
        writeln!(writer, "{key}")?;
    }
    Ok(())
}
