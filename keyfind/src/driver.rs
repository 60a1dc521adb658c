//! Insert-then-lookup runs over any structure in the crate.
//!
//! A run loads two streams of keys, inserts the first into a freshly built
//! structure, then queries every key of the second stream, timing both
//! phases. Key files hold one integer per line.

use std::{
    fmt,
    fs::File,
    io::{
        BufRead,
        BufReader,
        Write,
    },
    num::NonZeroUsize,
    path::Path,
    time::{
        Duration,
        Instant,
    },
};

use log::{
    debug,
    info,
    warn,
};

use crate::{
    AvlTree,
    BinarySearchTree,
    DEFAULT_CAPACITY,
    Error,
    HashTableChaining,
    HashTableProbing,
    Key,
    KeySet,
    LinkedList,
    Result,
};

/// Insert counts above which the linear structures get noticeably slow.
const LINEAR_STRUCTURE_WARNING: usize = 10_000;

/// Lookup counts above which [`RunReport::write_to`] skips the per-lookup
/// lines. Medium lookup lists fit below it, long ones do not.
pub const MAX_PRINTED_LOOKUPS: usize = 100_000;

/// Settings for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Bucket count for the chaining table and slot count for the probing
    /// table. Ignored by the list and the trees.
    pub table_capacity: NonZeroUsize,
    /// Whether [`RunReport::write_to`] emits one line per lookup. Runs with
    /// more than [`MAX_PRINTED_LOOKUPS`] lookups never do.
    pub print_results: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            table_capacity: DEFAULT_CAPACITY,
            print_results: true,
        }
    }
}

/// The structure a run stores its keys in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StructureKind {
    /// [`LinkedList`]
    LinkedList,
    /// [`BinarySearchTree`]
    BinarySearchTree,
    /// [`AvlTree`]
    AvlTree,
    /// [`HashTableChaining`]
    HashTableChaining,
    /// [`HashTableProbing`]
    HashTableProbing,
}

impl StructureKind {
    /// Every kind, in menu order.
    pub const ALL: [StructureKind; 5] = [
        StructureKind::LinkedList,
        StructureKind::BinarySearchTree,
        StructureKind::AvlTree,
        StructureKind::HashTableChaining,
        StructureKind::HashTableProbing,
    ];

    /// Builds an empty structure of this kind.
    pub fn build(self, config: &DriverConfig) -> Box<dyn KeySet> {
        match self {
            StructureKind::LinkedList => Box::new(LinkedList::new()),
            StructureKind::BinarySearchTree => Box::new(BinarySearchTree::new()),
            StructureKind::AvlTree => Box::new(AvlTree::new()),
            StructureKind::HashTableChaining => {
                Box::new(HashTableChaining::new(config.table_capacity))
            }
            StructureKind::HashTableProbing => {
                Box::new(HashTableProbing::new(config.table_capacity))
            }
        }
    }

    /// Returns `true` for structures whose lookups degrade to a linear scan
    /// on sorted or large input.
    pub fn is_linear(self) -> bool {
        matches!(
            self,
            StructureKind::LinkedList | StructureKind::BinarySearchTree
        )
    }
}

impl fmt::Display for StructureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            StructureKind::LinkedList => "Linked List",
            StructureKind::BinarySearchTree => "Binary Search Tree",
            StructureKind::AvlTree => "AVL Tree",
            StructureKind::HashTableChaining => "Hash Table with Chaining",
            StructureKind::HashTableProbing => "Hash Table with Probing",
        })
    }
}

/// The three dataset sizes and their conventional file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum DatasetSize {
    /// 1,000 ids.
    Short,
    /// 10,000 ids.
    Medium,
    /// 500,000 ids. Only practical for the AVL tree and the hash tables.
    Long,
}

impl DatasetSize {
    /// Every size, smallest first.
    pub const ALL: [DatasetSize; 3] = [
        DatasetSize::Short,
        DatasetSize::Medium,
        DatasetSize::Long,
    ];

    /// Number of real ids in the dataset.
    pub fn id_count(self) -> usize {
        match self {
            DatasetSize::Short => 1_000,
            DatasetSize::Medium => 10_000,
            DatasetSize::Long => 500_000,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            DatasetSize::Short => "Short",
            DatasetSize::Medium => "Medium",
            DatasetSize::Long => "Long",
        }
    }

    /// File holding the ids to insert, e.g. `listOfIdsShort.txt`.
    pub fn ids_file_name(self) -> String {
        format!("listOfIds{}.txt", self.suffix())
    }

    /// File holding the ids to look up, e.g. `lookupListShort.txt`.
    pub fn lookups_file_name(self) -> String {
        format!("lookupList{}.txt", self.suffix())
    }
}

/// Reads one key per line. Surrounding whitespace is ignored and blank lines
/// are skipped.
///
/// # Errors
/// [`Error::ParseKey`] with the 1-based line number of the first line that
/// is not an integer, or [`Error::Io`] if reading fails.
///
/// # Examples
///
/// ```
/// let keys = keyfind::driver::load_keys(&b"12\n  -3 \n\n7\n"[..])?;
/// assert_eq!(keys, [12, -3, 7]);
/// # Ok::<(), keyfind::Error>(())
/// ```
pub fn load_keys<R: BufRead>(reader: R) -> Result<Vec<Key>> {
    let mut keys = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let key = text.parse::<Key>().map_err(|source| Error::ParseKey {
            line: index + 1,
            text: text.to_owned(),
            source,
        })?;
        keys.push(key);
    }
    Ok(keys)
}

/// Opens `path` and reads it with [`load_keys`].
pub fn load_keys_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Key>> {
    let path = path.as_ref();
    let keys = load_keys(BufReader::new(File::open(path)?))?;
    debug!("loaded {} keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// The answer to one lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// The key that was queried.
    pub key: Key,
    /// The stored key, or `None` on a miss.
    pub found: Option<Key>,
}

/// Outcome of [`run`].
#[derive(Debug, Clone)]
pub struct RunReport {
    /// The structure the keys were stored in.
    pub kind: StructureKind,
    /// Number of keys inserted.
    pub inserted: usize,
    /// One verdict per lookup, in query order.
    pub verdicts: Vec<Verdict>,
    /// Wall time of the insert phase.
    pub insert_time: Duration,
    /// Wall time of the lookup phase.
    pub find_time: Duration,
}

impl RunReport {
    /// Number of lookups that found their key.
    pub fn hits(&self) -> usize {
        self.verdicts
            .iter()
            .filter(|verdict| verdict.found.is_some())
            .count()
    }

    /// Number of lookups that missed.
    pub fn misses(&self) -> usize {
        self.verdicts.len() - self.hits()
    }

    /// Writes the per-lookup lines (when `config.print_results` is set and
    /// there are at most [`MAX_PRINTED_LOOKUPS`] lookups) and the timing
    /// summary.
    pub fn write_to<W: Write>(&self, out: &mut W, config: &DriverConfig) -> Result<()> {
        let print_results = config.print_results && self.verdicts.len() <= MAX_PRINTED_LOOKUPS;
        if config.print_results && !print_results {
            warn!(
                "skipping {} per-lookup lines, printing only timings",
                self.verdicts.len()
            );
        }
        if print_results {
            for verdict in &self.verdicts {
                match verdict.found {
                    Some(key) => writeln!(out, "{key} found in the data structure")?,
                    None => writeln!(out, "Record not found")?,
                }
            }
        }
        writeln!(out)?;
        writeln!(
            out,
            "Time to insert {} records is: {} seconds",
            self.inserted,
            self.insert_time.as_secs_f64()
        )?;
        writeln!(
            out,
            "Time to find {} records is: {} seconds",
            self.verdicts.len(),
            self.find_time.as_secs_f64()
        )?;
        Ok(())
    }
}

/// Inserts every key of `inserts` into a new structure of `kind`, then looks
/// up every key of `lookups`.
///
/// # Errors
/// [`Error::TableFull`] if a probing table runs out of slots during the
/// insert phase. No lookups are performed in that case.
///
/// # Examples
///
/// ```
/// use keyfind::driver::{
///     DriverConfig,
///     StructureKind,
///     run,
/// };
///
/// let config = DriverConfig::default();
/// let report = run(&config, StructureKind::AvlTree, &[5, 3, 9], &[3, 4])?;
///
/// assert_eq!(report.inserted, 3);
/// assert_eq!(report.hits(), 1);
/// assert_eq!(report.misses(), 1);
/// # Ok::<(), keyfind::Error>(())
/// ```
pub fn run(
    config: &DriverConfig,
    kind: StructureKind,
    inserts: &[Key],
    lookups: &[Key],
) -> Result<RunReport> {
    if kind.is_linear() && inserts.len() > LINEAR_STRUCTURE_WARNING {
        warn!(
            "{kind} with {} keys will be slow; prefer the AVL tree or a hash table",
            inserts.len()
        );
    }

    let mut set = kind.build(config);

    let start = Instant::now();
    for &key in inserts {
        set.insert_key(key)?;
    }
    let insert_time = start.elapsed();

    let start = Instant::now();
    let verdicts: Vec<Verdict> = lookups
        .iter()
        .map(|&key| Verdict {
            key,
            found: set.find_key(key),
        })
        .collect();
    let find_time = start.elapsed();

    let report = RunReport {
        kind,
        inserted: set.len(),
        verdicts,
        insert_time,
        find_time,
    };
    info!(
        "{kind}: inserted {} keys in {:?}, {} hits and {} misses in {:?}",
        report.inserted,
        report.insert_time,
        report.hits(),
        report.misses(),
        report.find_time
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_load_keys_skips_blank_lines_and_whitespace() {
        let keys = load_keys(&b"  10 \n\n-20\r\n\t30\n   \n"[..]).unwrap();
        assert_eq!(keys, [10, -20, 30]);
    }

    #[test]
    fn test_load_keys_reports_line_number() {
        let err = load_keys(&b"1\n\n2\nthree\n4\n"[..]).unwrap_err();
        match err {
            Error::ParseKey { line, text, .. } => {
                assert_eq!(line, 4);
                assert_eq!(text, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_keys_empty_input() {
        assert!(load_keys(&b""[..]).unwrap().is_empty());
    }

    #[test]
    fn test_load_keys_from_missing_path_is_io_error() {
        let err = load_keys_from_path("/nonexistent/keyfind/listOfIdsShort.txt").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_dataset_file_names() {
        assert_eq!(DatasetSize::Short.ids_file_name(), "listOfIdsShort.txt");
        assert_eq!(DatasetSize::Medium.lookups_file_name(), "lookupListMedium.txt");
        assert_eq!(DatasetSize::Long.ids_file_name(), "listOfIdsLong.txt");
        assert_eq!(DatasetSize::Long.id_count(), 500_000);
    }

    #[test]
    fn test_every_kind_matches_hash_set() {
        let inserts: Vec<Key> = (0..300).map(|i| i * 37 - 4_000).collect();
        let lookups: Vec<Key> = (-50..350).map(|i| i * 37 - 4_000 + i % 3).collect();
        let reference: HashSet<Key> = inserts.iter().copied().collect();
        let config = DriverConfig {
            table_capacity: NonZeroUsize::new(401).unwrap(),
            print_results: false,
        };

        for kind in StructureKind::ALL {
            let report = run(&config, kind, &inserts, &lookups).unwrap();
            assert_eq!(report.inserted, inserts.len(), "{kind}");
            assert_eq!(report.verdicts.len(), lookups.len(), "{kind}");
            for verdict in &report.verdicts {
                let expected = reference.contains(&verdict.key).then_some(verdict.key);
                assert_eq!(verdict.found, expected, "{kind} disagrees on {}", verdict.key);
            }
        }
    }

    #[test]
    fn test_probing_table_full_aborts_run() {
        let config = DriverConfig {
            table_capacity: NonZeroUsize::new(3).unwrap(),
            print_results: true,
        };
        let err = run(&config, StructureKind::HashTableProbing, &[1, 2, 3, 4], &[1]).unwrap_err();
        assert!(matches!(err, Error::TableFull { capacity: 3 }));

        // Chaining shares the capacity but never fills up.
        let report = run(&config, StructureKind::HashTableChaining, &[1, 2, 3, 4], &[4]).unwrap();
        assert_eq!(report.hits(), 1);
    }

    #[test]
    fn test_report_output() {
        let config = DriverConfig::default();
        let report = run(&config, StructureKind::LinkedList, &[7, 8], &[8, 9]).unwrap();

        let mut out = Vec::new();
        report.write_to(&mut out, &config).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "8 found in the data structure");
        assert_eq!(lines[1], "Record not found");
        assert_eq!(lines[2], "");
        assert!(lines[3].starts_with("Time to insert 2 records is: "));
        assert!(lines[4].starts_with("Time to find 2 records is: "));
    }

    #[test]
    fn test_quiet_report_prints_only_timings() {
        let config = DriverConfig {
            print_results: false,
            ..DriverConfig::default()
        };
        let report = run(&config, StructureKind::AvlTree, &[1], &[1, 2]).unwrap();

        let mut out = Vec::new();
        report.write_to(&mut out, &config).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), 3);
        assert!(!out.contains("Record not found"));
    }

    #[test]
    fn test_long_lookup_list_prints_only_timings() {
        let config = DriverConfig::default();
        let lookups: Vec<Key> = (0..=MAX_PRINTED_LOOKUPS as Key).collect();
        let report = run(&config, StructureKind::HashTableChaining, &[1, 2], &lookups).unwrap();
        assert_eq!(report.verdicts.len(), MAX_PRINTED_LOOKUPS + 1);
        assert_eq!(report.hits(), 2);

        let mut out = Vec::new();
        report.write_to(&mut out, &config).unwrap();
        let out = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "");
        assert!(lines[2].starts_with("Time to find 100001 records is: "));
    }

    #[test]
    fn test_lookup_list_at_print_limit_is_printed() {
        let config = DriverConfig::default();
        let lookups = vec![5; MAX_PRINTED_LOOKUPS];
        let report = run(&config, StructureKind::AvlTree, &[5], &lookups).unwrap();

        let mut out = Vec::new();
        report.write_to(&mut out, &config).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.lines().count(), MAX_PRINTED_LOOKUPS + 3);
    }
}
