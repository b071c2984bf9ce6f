//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "REALDIAG_LOG";

/// Filter used when `REALDIAG_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "realdiag=info";

/// Initialize the RealDiag tracing/logging system.
///
/// Reads `REALDIAG_LOG` for per-module log levels, e.g.
/// `REALDIAG_LOG=realdiag_analysis=debug,realdiag_core=warn`.
/// Output goes to stderr so stdout stays clean for reports.
///
/// Calling it more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
