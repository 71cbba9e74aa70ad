//! Exit codes for the logscrub CLI.
//!
//! Exit codes communicate operation outcome without requiring output
//! parsing. These are stable; changes require a major version bump.

/// Exit codes for logscrub runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Tree fully processed.
    Clean = 0,

    /// The log path is missing or not a directory; nothing was mutated.
    PathError = 1,

    /// I/O failure mid-run; the tree may be partially processed and is safe
    /// to re-run.
    IoError = 2,

    /// The redaction policy file could not be loaded or parsed.
    PolicyError = 10,
}

impl ExitCode {
    /// Exit the process with this code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ExitCode::Clean as i32, 0);
        assert_eq!(ExitCode::PathError as i32, 1);
        assert_eq!(ExitCode::IoError as i32, 2);
        assert_eq!(ExitCode::PolicyError as i32, 10);
    }
}
