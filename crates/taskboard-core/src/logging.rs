use std::fs::OpenOptions;

use tracing_subscriber::EnvFilter;

use crate::{BoardError, BoardResult, LoggingConfig};

/// Install the global `tracing` subscriber.
///
/// With `debug_log` set, everything at DEBUG and above goes to that file with
/// source locations and no colors. Otherwise events go to stderr filtered by
/// `RUST_LOG`, falling back to the configured level.
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> BoardResult<()> {
    if let Some(log_path) = &config.debug_log {
        let log_file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .try_init()
            .map_err(|e| BoardError::Config(e.to_string()))
    } else {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.level))
            .map_err(|e| BoardError::Config(e.to_string()))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| BoardError::Config(e.to_string()))
    }
}
