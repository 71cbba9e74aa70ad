//! logscrub core - archive-aware path redaction for diagnostic log trees.
//!
//! Walks a directory of extracted logs, transparently unpacking nested gzip
//! and tar containers, redacts path-like substrings in every plain-text log
//! line, and re-packs containers into their original nested form. The tree
//! is mutated in place; the tree itself is the output.

pub mod config;
pub mod error;
pub mod exit_codes;
pub mod kind;
pub mod logging;
pub mod walker;

pub use config::ScrubConfig;
pub use error::{Result, ScrubError};
pub use exit_codes::ExitCode;
pub use kind::FileKind;
pub use walker::redact_tree;
