//! Tracing initialization for the CLI.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Install the global subscriber, writing to stderr so stdout stays
/// machine-readable.
///
/// Falls back to the default filter if `filter` does not parse. Only the
/// first call has any effect.
pub fn init_tracing(filter: &str) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
