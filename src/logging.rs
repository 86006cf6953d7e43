//! Logging configuration and initialization
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! the caller. [`init_tracing`] is the convenience for binaries and tests.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Filter directive for a `-v` count
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install a global fmt subscriber
///
/// `RUST_LOG` wins when it is set and parses; otherwise the level comes from
/// `verbose`. Fails if a global subscriber is already installed.
pub fn init_tracing(verbose: u8) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level(verbose)))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2) // Show target module for -vv and above
        .with_thread_ids(verbose >= 3) // Show thread IDs for -vvv
        .with_line_number(verbose >= 3) // Show line numbers for -vvv
        .try_init()
        .map_err(|e| LoggingError::Install(e.to_string()))?;

    debug!("Tracing initialized with verbosity level: {}", verbose);
    Ok(())
}
