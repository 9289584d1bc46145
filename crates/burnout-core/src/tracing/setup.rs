//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Filter used when `BURNOUT_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "burnout_core=info,burnout_analysis=info";

/// Initialize the tracing/logging system.
///
/// Reads `BURNOUT_LOG` for per-crate log levels, e.g.
/// `BURNOUT_LOG=burnout_analysis=debug`. Falls back to [`DEFAULT_FILTER`].
///
/// Idempotent. If another subscriber is already installed, this is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
