//! Error types for lexindex.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors surfaced by the index.
///
/// Only persistence can fail: a duplicate insert or a delete/lookup miss is a
/// reported outcome, not an error, and causes no mutation. An internal
/// invariant violation is never represented here — it indicates an algorithm
/// bug and panics instead of being handed back to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while saving or loading an index file.
    ///
    /// On save the in-memory tree is unchanged; on load the tree is left
    /// fully empty.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The index file is malformed (truncated entry, bad flag or sentinel,
    /// checksum mismatch, trailing bytes, duplicate key).
    #[error("corrupt index file ({context})")]
    CorruptFormat { context: &'static str },
}

impl Error {
    /// Attach a path to an `std::io::Error`.
    pub(crate) fn io(path: &std::path::Path, source: io::Error) -> Self {
        Error::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
