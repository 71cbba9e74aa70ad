//! Logging bootstrap.
//!
//! stdout stays clean; all log output goes to stderr. The filter honors
//! `RUST_LOG` when set, otherwise it is derived from the `-v`/`-q` flags.

use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber. Safe to call once at startup.
pub fn init(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
