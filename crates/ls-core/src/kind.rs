//! File-kind classification.
//!
//! Every filesystem entry is classified exactly once, from its extension,
//! and dispatched with an exhaustive match. Tar archives normally arrive
//! wrapped in gzip and are only seen after the gzip layer is stripped.

use std::ffi::OsStr;
use std::path::Path;

/// What a filesystem entry is, as far as the walker cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Plain-text log, redacted in place.
    PlainLog,
    /// Gzip-compressed file (`.gz`); the inner file is classified again
    /// after decompression.
    GzipFile,
    /// Tar container (`.tar`); transiently extracted, walked, re-packed.
    TarArchive,
}

impl FileKind {
    /// Classify a path by extension, case-insensitively.
    pub fn classify(path: &Path) -> Self {
        match path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("gz") => FileKind::GzipFile,
            Some("tar") => FileKind::TarArchive,
            _ => FileKind::PlainLog,
        }
    }
}
