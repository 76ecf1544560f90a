//! Tracing setup for test binaries.
//!
//! Fakes log every invocation at `trace` and every reset at `debug`. Test
//! binaries call [`init_test_logging`] to see them; the filter comes from
//! `RUST_LOG` and falls back to [`DEFAULT_FILTER`].

use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn,bt_fake_core=info,bt_host_mock=info,bt_id_mocks=info";

// Initialize tracing subscriber once for test logging
static TRACING: Lazy<()> = Lazy::new(|| {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    // Another subscriber (e.g. tracing-test) may already be installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
});

/// Install the test subscriber. Safe to call from every test.
pub fn init_test_logging() {
    Lazy::force(&TRACING);
}
