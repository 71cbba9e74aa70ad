//! Redaction policy configuration.
//!
//! The built-in defaults replicate the constants the tool has always shipped
//! with; an operator can override them with a JSON policy file.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Placeholder substituted for every redacted path run.
pub const DEFAULT_PLACEHOLDER: &str = "/xxx";

/// Filename prefix marking a file as already processed.
pub const DEFAULT_MARKER_PREFIX: &str = "xxx-";

/// Path tokens that are never redacted: markup tag names and telemetry
/// endpoints that match the path pattern but carry no sensitive data.
const DEFAULT_IGNORE_PATHS: &[&str] = &[
    "/td", "/tr", "/th", "/a", "/table", "/tbody", "/thead", "/tracez",
    "/flagz", "/statz", "/pulsez", "/master", "/head", "/script", "/font",
    "/css", "/javascript", "/html",
];

/// Redaction policy: what to substitute, how to mark processed files, and
/// which path tokens to leave alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedactionPolicy {
    /// Replacement token for redacted path runs.
    #[serde(default = "default_placeholder")]
    pub placeholder: String,

    /// Filename prefix used for in-flight output files and as the
    /// already-processed guard.
    #[serde(default = "default_marker_prefix")]
    pub marker_prefix: String,

    /// Exact path tokens exempt from redaction.
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_marker_prefix() -> String {
    DEFAULT_MARKER_PREFIX.to_string()
}

fn default_ignore_paths() -> Vec<String> {
    DEFAULT_IGNORE_PATHS.iter().map(|s| s.to_string()).collect()
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            marker_prefix: default_marker_prefix(),
            ignore_paths: default_ignore_paths(),
        }
    }
}

impl RedactionPolicy {
    /// Load a policy from a JSON file. Missing fields fall back to the
    /// built-in defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let policy = serde_json::from_str(&content)?;
        Ok(policy)
    }
}
