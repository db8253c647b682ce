//! Log subscriber for the extension module.
//!
//! Gateway events are emitted through `tracing` under the `roundmode::fenv` target.
//! On import a stderr subscriber is installed with an `EnvFilter` read from `RUST_LOG`
//! (default `warn`). If the host process already installed a global subscriber, that
//! one is kept.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the stderr subscriber if none is set yet.
///
/// # Returns
///
/// `true` if this call installed the subscriber, `false` if another global subscriber
/// was already in place and has been left alone.
#[must_use]
pub fn init() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
