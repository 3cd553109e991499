//! Tracing subscriber installation for binaries.
//!
//! Library code only emits events; installing a subscriber is left to the
//! process entry point.

use thiserror::Error;
use tracing_subscriber::{
    EnvFilter, filter::ParseError, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Directive applied on top of `RUST_LOG`.
pub const DEFAULT_DIRECTIVE: &str = "careboard=info";

/// Errors returned while installing the subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The default directive failed to parse.
    #[error("invalid log directive: {0}")]
    Directive(#[from] ParseError),

    /// A global subscriber is already installed.
    #[error("failed to install tracing subscriber: {0}")]
    Install(#[from] TryInitError),
}

/// Installs a formatting subscriber writing to standard error.
///
/// `RUST_LOG` is honoured; `careboard` events at `info` and above are always
/// enabled.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter cannot be built or a global
/// subscriber already exists.
pub fn init() -> Result<(), TelemetryError> {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(DEFAULT_DIRECTIVE.parse()?))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()?;
    Ok(())
}
