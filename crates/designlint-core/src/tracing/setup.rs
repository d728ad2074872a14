//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the designlint tracing/logging system.
///
/// Reads the `DESIGNLINT_LOG` environment variable for per-subsystem log levels.
/// Format: `DESIGNLINT_LOG=designlint_analysis::catalog=debug,designlint_analysis=info`
///
/// Falls back to `designlint=info` if `DESIGNLINT_LOG` is not set or is invalid.
///
/// Idempotent. A subscriber installed elsewhere first is left in place.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("designlint=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
