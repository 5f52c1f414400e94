//! Diagnostic logging setup
//!
//! Store diagnostics (save/load failures, mutations) go through `tracing`.
//! Binaries call [`init_tracing`] once at startup; libraries embedding the
//! store can install their own subscriber instead.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "categories=warn";

/// Install a stderr fmt subscriber filtered by `RUST_LOG`
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed (tests, embedders)
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
