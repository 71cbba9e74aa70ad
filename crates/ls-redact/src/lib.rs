//! Path redaction engine for diagnostic log trees.
//!
//! This crate provides the line- and file-level redaction used by the
//! `logscrub` CLI: path-like substrings in log lines are replaced with a
//! fixed placeholder before the logs are shared outside the owning
//! organization.
//!
//! # Key Features
//!
//! - **Byte-oriented**: log files routinely contain bytes that are not valid
//!   UTF-8. All matching runs on raw bytes, so every input byte round-trips
//!   losslessly and no decode error is possible.
//! - **Markup-aware**: paths appearing inside `<...>` markup tokens are
//!   structural, not data, and are left alone.
//! - **Ignore set**: a fixed set of markup tag names and telemetry endpoint
//!   names is never redacted even though it matches the path pattern.
//! - **Marker guard**: files whose name carries the `xxx-` prefix were left
//!   behind by an interrupted run and are skipped on reprocessing.
//!
//! # Example
//!
//! ```
//! use ls_redact::{RedactionPolicy, Redactor};
//!
//! let redactor = Redactor::new(RedactionPolicy::default());
//! let line = redactor.redact_line(b"data=/home/user accessed");
//! assert_eq!(&line[..], b"data=/xxx accessed");
//! ```

pub mod error;
pub mod file;
pub mod line;
pub mod policy;

pub use error::{RedactError, Result};
pub use file::{redact_file, FileOutcome};
pub use line::Redactor;
pub use policy::{RedactionPolicy, DEFAULT_MARKER_PREFIX, DEFAULT_PLACEHOLDER};
