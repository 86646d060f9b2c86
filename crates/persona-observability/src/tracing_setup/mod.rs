//! Tracing setup: subscriber installation, span macros, and structured events.

pub mod events;
pub mod spans;

use std::sync::Once;

use persona_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable consulted for the log filter.
pub const LOG_ENV_VAR: &str = "PERSONA_LOG";

/// Initialize the tracing subscriber.
///
/// Respects `PERSONA_LOG` for filtering (e.g. `persona_inference=debug`),
/// falling back to `config.log_level`. Idempotent: only the first call
/// installs a subscriber.
pub fn init_tracing(config: &ObservabilityConfig) {
    let fallback = config.log_level.clone();
    let json = config.json;
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&fallback));
        install(filter, json);
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| install(EnvFilter::new(filter), false));
}

fn install(filter: EnvFilter, json: bool) {
    let registry = tracing_subscriber::registry().with(filter);
    // try_init: another subscriber may already be installed by the host.
    let _ = if json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_thread_ids(true),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .try_init()
    };
}
