//! Error definitions.
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building a [`ChainedHashMap`](crate::ChainedHashMap).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// The requested number of buckets was zero.
    #[error("table size must be positive, got {requested}")]
    InvalidCapacity { requested: usize },
}

/// Errors raised by the word-frequency client.
#[derive(Error, Debug)]
pub enum WordCountError {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("invalid table size {0:?}")]
    InvalidTableSize(String),
}
