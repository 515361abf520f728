//! Tracing subscriber setup for the command-line front end.

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "rollup_todo=info";

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// A global subscriber was already installed.
    #[error("logging already initialised: {0}")]
    AlreadyInitialised(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter from `RUST_LOG`, falling back to `default_directive`.
///
/// A non-zero `verbose` count raises this crate to `debug` (1) or `trace`
/// (2 and above) regardless of the environment.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when a directive does not parse.
pub fn env_filter(default_directive: &str, verbose: u8) -> Result<EnvFilter, TelemetryError> {
    let base = match std::env::var("RUST_LOG") {
        Ok(value) if !value.trim().is_empty() => EnvFilter::try_new(value)?,
        _ => EnvFilter::try_new(default_directive)?,
    };
    Ok(match verbose {
        0 => base,
        1 => base.add_directive("rollup_todo=debug".parse()?),
        _ => base.add_directive("rollup_todo=trace".parse()?),
    })
}

/// Installs the global subscriber. Logs go to stderr so stdout stays free
/// for rendered output.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter is invalid or a subscriber is
/// already installed.
pub fn init(default_directive: &str, verbose: u8) -> Result<(), TelemetryError> {
    let filter = env_filter(default_directive, verbose)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose > 0),
        )
        .try_init()?;
    Ok(())
}
