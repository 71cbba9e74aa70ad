//! Gzip and tar pack/unpack helpers for log tree processing.
//!
//! These are plain byte-stream codecs: nothing here inspects file content.
//! The walker in `ls-core` uses them to transiently expand archive nodes,
//! redact what is inside, and collapse them back to their original form.

pub mod error;
pub mod gzip;
pub mod tarball;

pub use error::{ArchiveError, Result};
pub use tarball::Compression;
