//! Logging initialization.

use anyhow::Result;
use tracing_subscriber::{fmt, EnvFilter};

use crate::args::LogLevel;

/// Initialize logging at `level`, unless `RUST_LOG` says otherwise.
///
/// Logs are written to stderr so stdout remains clean for records.
pub fn init_logging(level: LogLevel) -> Result<()> {
    let level: tracing::Level = level.into();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}
