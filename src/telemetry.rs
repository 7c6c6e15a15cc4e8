//! Logging setup for the command-line tool.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding the default log filter.
pub const LOG_ENV: &str = "REGULARISH_LOG";

/// Filter used when neither `--log` nor [`LOG_ENV`] is set.
pub const DEFAULT_FILTER: &str = "warn";

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while installing the log subscriber.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(String),
    #[error("failed to install log subscriber: {0}")]
    Subscriber(#[from] SetGlobalDefaultError),
}

/// Pick the filter: explicit value first, then the environment, then the default.
#[must_use]
pub fn resolve_filter(explicit: Option<&str>, env: Option<&str>) -> String {
    explicit
        .or(env)
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install a stderr subscriber using `filter`.
///
/// Only the first call installs anything; later calls succeed without
/// touching global state.
///
/// # Errors
///
/// Returns an error if `filter` is not a valid filter directive or a
/// global subscriber has already been installed elsewhere.
pub fn initialise(filter: &str) -> Result<(), TelemetryError> {
    INSTALLED.get_or_try_init(|| install(filter)).map(|_| ())
}

fn install(filter: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(filter).map_err(|err| TelemetryError::Filter(err.to_string()))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
