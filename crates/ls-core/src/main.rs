//! logscrub - archive-aware path redaction for diagnostic log trees.
//!
//! Recursively walks the tree at `--logpath`, unpacking nested gzip/tar
//! containers, replacing path-like substrings in log lines with a fixed
//! placeholder, and re-packing containers into their original form.

use clap::Parser;
use ls_core::{logging, redact_tree, ExitCode, ScrubConfig, ScrubError};
use ls_redact::Redactor;
use std::path::PathBuf;
use tracing::error;

/// Redact path-like strings inside an extracted diagnostic log tree.
#[derive(Parser)]
#[command(name = "logscrub")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the extracted logs; redacted in place
    #[arg(short = 'l', long, value_name = "DIR")]
    logpath: PathBuf,

    /// JSON redaction policy overriding the built-in defaults
    #[arg(long, value_name = "FILE")]
    policy: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = ScrubConfig::new(cli.logpath).with_policy_path(cli.policy);
    match run(&config) {
        Ok(()) => ExitCode::Clean.exit(),
        Err(err) => {
            error!("{err}");
            match err {
                ScrubError::NotFound { .. } => ExitCode::PathError.exit(),
                ScrubError::Policy { .. } => ExitCode::PolicyError.exit(),
                ScrubError::Io(_) | ScrubError::Archive(_) | ScrubError::Redact(_) => {
                    ExitCode::IoError.exit()
                }
            }
        }
    }
}

fn run(config: &ScrubConfig) -> ls_core::Result<()> {
    let policy = config.load_policy()?;
    let redactor = Redactor::new(policy);
    redact_tree(config, &redactor)
}
