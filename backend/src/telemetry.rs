//! Tracing subscriber bootstrap for host applications.

use tracing_subscriber::{EnvFilter, fmt};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Structured JSON, one object per line.
    #[default]
    Json,
    /// Human-readable text.
    Pretty,
}

/// Raised when a global subscriber is already installed.
#[derive(Debug, thiserror::Error)]
#[error("tracing init failed: {message}")]
pub struct TelemetryInitError {
    message: String,
}

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Only the first successful call in a process installs a subscriber; later
/// calls return [`TelemetryInitError`].
pub fn init_tracing(format: LogFormat) -> Result<(), TelemetryInitError> {
    let builder = fmt().with_env_filter(EnvFilter::from_default_env());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
    result.map_err(|err| TelemetryInitError {
        message: err.to_string(),
    })
}
