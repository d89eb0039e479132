//! Tracing setup for host applications
//!
//! The library only emits `tracing` events. Binaries embedding it call
//! [`init_tracing`] once at startup to print them.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is unset, empty or unparsable
pub const DEFAULT_DIRECTIVE: &str = "rust_savings_engine=info";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`
///
/// `RUST_LOG` replaces [`DEFAULT_DIRECTIVE`] entirely, so
/// `RUST_LOG=rust_savings_engine=debug` turns on the engine's debug events.
/// Safe to call more than once; only the first call has an effect. If another
/// global subscriber is already installed, this one is skipped.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        let filter = env_filter(rust_log.as_deref());

        if let Err(error) = fmt().with_env_filter(filter).try_init() {
            tracing::debug!(%error, "tracing subscriber already installed");
            return;
        }
        tracing::info!("savings engine tracing initialized");
    });
}

/// Build the filter from a `RUST_LOG` value, falling back to the default
pub(crate) fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}
