//! Run configuration.
//!
//! An explicit struct passed into the entry point; there is no global
//! mutable state.

use crate::{Result, ScrubError};
use ls_redact::RedactionPolicy;
use std::path::PathBuf;

/// Configuration for one scrub run.
#[derive(Debug, Clone)]
pub struct ScrubConfig {
    /// Root of the log tree, mutated in place.
    pub root: PathBuf,

    /// Optional JSON policy file overriding the built-in defaults.
    pub policy_path: Option<PathBuf>,
}

impl ScrubConfig {
    /// Configuration with the built-in policy.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            policy_path: None,
        }
    }

    /// Use a policy file instead of the built-in defaults.
    pub fn with_policy_path(mut self, path: Option<PathBuf>) -> Self {
        self.policy_path = path;
        self
    }

    /// Load the effective redaction policy.
    pub fn load_policy(&self) -> Result<RedactionPolicy> {
        match &self.policy_path {
            Some(path) => RedactionPolicy::load(path).map_err(|source| ScrubError::Policy {
                path: path.clone(),
                source,
            }),
            None => Ok(RedactionPolicy::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_without_file() {
        let config = ScrubConfig::new("/tmp/logs");
        let policy = config.load_policy().unwrap();
        assert_eq!(policy.placeholder, "/xxx");
    }

    #[test]
    fn missing_policy_file_is_an_error() {
        let config = ScrubConfig::new("/tmp/logs")
            .with_policy_path(Some(PathBuf::from("/nonexistent/policy.json")));
        assert!(matches!(
            config.load_policy(),
            Err(ScrubError::Policy { .. })
        ));
    }

    #[test]
    fn policy_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("policy.json");
        std::fs::write(&path, r#"{"placeholder": "/hidden"}"#).unwrap();

        let config = ScrubConfig::new(dir.path()).with_policy_path(Some(path));
        let policy = config.load_policy().unwrap();
        assert_eq!(policy.placeholder, "/hidden");
        assert_eq!(policy.marker_prefix, "xxx-");
    }
}
