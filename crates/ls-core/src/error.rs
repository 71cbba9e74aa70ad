//! Error types for the tree walker and CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for logscrub operations.
pub type Result<T> = std::result::Result<T, ScrubError>;

/// Errors that can occur during a scrub run.
#[derive(Error, Debug)]
pub enum ScrubError {
    /// The root path is missing or not a directory. Nothing was mutated.
    #[error("logpath {} is not found", path.display())]
    NotFound { path: PathBuf },

    /// Failed to load the redaction policy file.
    #[error("failed to load policy {}: {source}", path.display())]
    Policy {
        path: PathBuf,
        source: ls_redact::RedactError,
    },

    /// I/O error during the tree walk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive unpack/repack error.
    #[error(transparent)]
    Archive(#[from] ls_archive::ArchiveError),

    /// Log file redaction error.
    #[error(transparent)]
    Redact(#[from] ls_redact::RedactError),
}
