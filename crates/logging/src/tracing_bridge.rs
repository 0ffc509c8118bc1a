//! Subscriber construction for the `tracing` events emitted by the workspace.

use std::io;

use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use super::config::VerbosityConfig;

/// Environment variable whose filter directives override the `-v` level.
pub const LOG_ENV: &str = "DIRLIST_LOG";

/// Builds the event filter for `config`.
///
/// A valid [`LOG_ENV`] value wins; otherwise the level derived from the
/// verbosity configuration applies to every target.
#[must_use]
pub fn build_filter(config: VerbosityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(config.directive()))
}

/// Builds a plain-text subscriber that writes formatted events to `writer`.
pub fn subscriber<W>(config: VerbosityConfig, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .without_time()
        .finish()
}

/// Installs the global subscriber, writing events to standard error.
///
/// Returns `false` when a global subscriber was already installed; the
/// existing one is left in place.
///
/// ```
/// use logging::{VerbosityConfig, init_tracing};
///
/// init_tracing(VerbosityConfig::from_verbose_level(2));
/// assert!(!init_tracing(VerbosityConfig::default()));
/// ```
pub fn init_tracing(config: VerbosityConfig) -> bool {
    tracing::subscriber::set_global_default(subscriber(config, io::stderr)).is_ok()
}
