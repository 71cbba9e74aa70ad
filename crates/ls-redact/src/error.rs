//! Error types for the redaction engine.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for redaction operations.
pub type Result<T> = std::result::Result<T, RedactError>;

/// Errors that can occur during redaction.
#[derive(Error, Debug)]
pub enum RedactError {
    /// I/O error while reading or rewriting a log file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse a redaction policy file.
    #[error("policy parse error: {0}")]
    Policy(#[from] serde_json::Error),

    /// The target path has no usable file name component.
    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}
