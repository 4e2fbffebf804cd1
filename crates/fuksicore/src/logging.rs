//! Logging initialization
//!
//! Installs a `tracing` fmt subscriber filtered by `RUST_LOG` and bridges the
//! `log` macros (used throughout the crates, and by teloxide itself) into it.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize the global logger for console output.
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - A global logger was already installed
pub fn init_logger() -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;
    tracing_log::LogTracer::init().map_err(|e| anyhow::anyhow!("Failed to bridge log records: {}", e))?;

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}
