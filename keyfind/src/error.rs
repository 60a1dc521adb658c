use thiserror::Error;

/// Errors reported by the structures and the driver.
///
/// Lookups that miss are not errors; every `find` returns an [`Option`].
#[derive(Error, Debug)]
pub enum Error {
    /// A probing hash table cycled back to the home slot without finding an
    /// empty slot.
    #[error("Table Full: no empty slot among {capacity} slots")]
    TableFull {
        /// Number of slots in the table.
        capacity: usize,
    },

    /// A list position at or past the end of the list was requested.
    #[error("Index Out Of Range: index {index} with length {len}")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The length of the list at the time of the request.
        len: usize,
    },

    /// A line of a key file did not hold an integer.
    #[error("line {line}: `{text}` is not an integer key")]
    ParseKey {
        /// 1-based line number.
        line: usize,
        /// The offending line with surrounding whitespace removed.
        text: String,
        /// Why the line failed to parse.
        #[source]
        source: std::num::ParseIntError,
    },

    /// Reading or writing a key file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
