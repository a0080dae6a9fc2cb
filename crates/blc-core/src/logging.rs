//! Logging init: structured `tracing` output to stderr.
//!
//! Reports go to stdout from the CLI; diagnostics (invalid lines, duplicates,
//! config loading) go through `tracing` so they can be raised with
//! `RUST_LOG=blc_core=debug` without touching the report.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logging to stderr. Fails if a global subscriber is already set.
pub fn init_logging() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;
    Ok(())
}
