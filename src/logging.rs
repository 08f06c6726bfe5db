use anyhow::{anyhow, Result};
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Log file written inside the data directory while the TUI owns the terminal
pub const LOG_FILE_NAME: &str = "dayglass.log";

const DEFAULT_FILTER: &str = "dayglass=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send logs to `<data_dir>/dayglass.log`. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_file_logging(data_dir: &Path) -> Result<WorkerGuard> {
    let appender = tracing_appender::rolling::never(data_dir, LOG_FILE_NAME);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))?;

    Ok(guard)
}

/// Log to stderr, for subcommands that don't take over the terminal
pub fn init_stderr_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialise logging: {}", e))
}
