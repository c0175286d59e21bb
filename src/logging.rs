//! Diagnostic logging to stderr
//!
//! Verbosity comes from the `-v` flag count unless `HEFT_LOG` holds an
//! `EnvFilter` directive, which wins.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// Environment variable overriding the verbosity flag.
pub const LOG_ENV: &str = "HEFT_LOG";

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .finish()
        .try_init()
}

fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
