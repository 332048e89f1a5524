//! Tracing subscriber setup for the binary.

use anyhow::{Context, Result, anyhow};
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// Honors `RUST_LOG` (default `warn`). Logs go to `log_file` without ANSI
/// colors when given, otherwise to stderr.
///
/// # Errors
///
/// Fails if the log file cannot be created or a global subscriber is
/// already installed.
pub fn initialize_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|err| anyhow!("Failed to initialize tracing: {err}"))?;
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|err| anyhow!("Failed to initialize tracing: {err}"))?;
        }
    }

    info!("Tracing initialized");
    Ok(())
}
