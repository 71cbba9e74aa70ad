//! Error types for archive operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during archive operations.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A packed file escaped the directory being packed.
    #[error("file outside pack root: {0}")]
    OutsideRoot(PathBuf),
}

/// Result type alias for archive operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
