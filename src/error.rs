use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Working directory or one of its files could not be created or read.
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The provider produced no keys, so there is nothing to measure.
    #[error("no keys loaded from {0}")]
    EmptyDataset(String),

    #[error("invalid configuration: {0}")]
    Config(&'static str),

    /// Sorted-order check failed after the sort phase.
    #[error("sort order violation at index {index}: {previous:?} > {current:?}")]
    SortOrderViolation {
        index: usize,
        previous: String,
        current: String,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
