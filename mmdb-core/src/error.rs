//! Common error types for the movie catalogue

use std::path::PathBuf;
use thiserror::Error;

/// Common result type for catalogue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalogue core.
///
/// Validation errors are expected to be handled by the presentation layer
/// (re-prompt the user); storage errors have no recovery strategy and
/// propagate to the process boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// Rating input is not a number in [0, 10]
    #[error("invalid rating {0:?}: expected a number between 0 and 10")]
    InvalidRating(String),

    /// Year input is not a non-negative integer
    #[error("invalid year {0:?}: expected a non-negative integer")]
    InvalidYear(String),

    /// Title input is empty after trimming
    #[error("invalid title: must not be empty")]
    InvalidTitle,

    /// Title already present in the store
    #[error("movie {0:?} already exists")]
    DuplicateTitle(String),

    /// Title not present in the store
    #[error("movie {0:?} doesn't exist")]
    NotFound(String),

    /// Operation requires at least one stored record
    #[error("the catalogue is empty")]
    EmptyCollection,

    /// Backing file exists but could not be read
    #[error("failed to read database {}: {source}", path.display())]
    StorageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Backing file exists but does not parse as a title -> record object
    #[error("database {} is corrupt: {source}", path.display())]
    StorageCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Backing file could not be written
    #[error("failed to write database {}: {source}", path.display())]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for errors the presentation layer should handle by re-prompting.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidRating(_)
                | Error::InvalidYear(_)
                | Error::InvalidTitle
                | Error::DuplicateTitle(_)
                | Error::NotFound(_)
        )
    }
}
