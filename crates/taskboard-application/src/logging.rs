//! Tracing subscriber setup.

use anyhow::{Result, anyhow};
use taskboard_core::config::TaskboardConfig;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Builds the filter: `RUST_LOG` when set, otherwise `config.log_level`.
pub fn env_filter(config: &TaskboardConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => parse_log_level(&config.log_level),
    }
}

/// Parses a `tracing` filter directive such as `info` or `taskboard=debug`.
pub fn parse_log_level(log_level: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(log_level)
        .map_err(|e| anyhow!("Invalid log_level '{}': {}", log_level, e))
}

/// Installs a global fmt subscriber writing to stderr.
///
/// Returns an error if `log_level` is not a valid filter directive. If a
/// global subscriber is already installed the call is a no-op.
pub fn init_tracing(config: &TaskboardConfig) -> Result<()> {
    let filter = env_filter(config)?;

    if tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .is_err()
    {
        tracing::debug!("Global subscriber already set, keeping it");
    }
    Ok(())
}
