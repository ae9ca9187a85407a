//! Errors raised while listing a directory's children.

use std::io;
use thiserror::Error;

/// A directory listing failure, localized to the directory that failed.
///
/// The `Display` output is the text shown inline in the tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Sin permiso para acceder")]
    PermissionDenied,

    #[error("{0}")]
    Io(String),
}

impl ListingError {
    /// Classify an I/O failure into one of the two reported kinds.
    pub fn from_io(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ListingError::PermissionDenied,
            _ => ListingError::Io(err.to_string()),
        }
    }
}

impl From<&walkdir::Error> for ListingError {
    fn from(err: &walkdir::Error) -> Self {
        match err.io_error() {
            Some(io_err) => ListingError::from_io(io_err),
            None => ListingError::Io(err.to_string()),
        }
    }
}
