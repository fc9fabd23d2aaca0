//! Logging setup for binaries embedding Owngame.

use tracing_subscriber::EnvFilter;

use crate::OwngameError;

/// Installs a global `tracing` subscriber that writes formatted events to
/// stderr.
///
/// `RUST_LOG` wins if it is set; otherwise `default_filter` (usually
/// [`ServerConfig::log_filter`](crate::ServerConfig::log_filter)) is used.
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place.
///
/// # Errors
/// [`OwngameError::LogFilter`] if `default_filter` is not a valid directive
/// list and `RUST_LOG` is unset.
pub fn init_tracing(default_filter: &str) -> Result<(), OwngameError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)?,
    };

    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}
