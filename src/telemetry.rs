//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_FILTER_VAR: &str = "STUDYMATE_LOG";

const DEFAULT_FILTER: &str = "studymate=info";

static INIT: Once = Once::new();

/// Installs the global tracing subscriber.
///
/// Reads filter directives from `STUDYMATE_LOG`, e.g.
/// `STUDYMATE_LOG=studymate=debug`, and falls back to `studymate=info`.
/// Only the first call has any effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_FILTER_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
