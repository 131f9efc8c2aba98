//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the constguard tracing/logging system.
///
/// Reads `CONSTGUARD_LOG` for per-module log levels, e.g.
/// `CONSTGUARD_LOG=constguard_analysis=debug`. Falls back to
/// `constguard=info` when unset or invalid. Output goes to stderr so it
/// never mixes with a JSON report on stdout.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("constguard=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init();
    });
}
