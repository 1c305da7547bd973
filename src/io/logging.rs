//! Structured logging setup for the command-line driver

use crate::io::configuration::DEFAULT_LOG_FILTER;
use tracing_subscriber::EnvFilter;

/// Log filter directive for the requested verbosity
///
/// `RUST_LOG` takes precedence when set.
pub const fn default_filter(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        DEFAULT_LOG_FILTER
    }
}

/// Install a stderr fmt subscriber filtered by `RUST_LOG` or the default
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing(quiet: bool, verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
