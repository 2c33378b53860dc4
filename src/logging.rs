//! Logging setup for hosts embedding the configuration core.
//!
//! The crate itself only emits `tracing` events; a host that already
//! installs its own subscriber can ignore this module entirely. For hosts
//! without one, [`init`] wires a stderr subscriber with an env-overridable
//! filter, and [`init_for_tests`] routes output through the libtest
//! capture writer so `--nocapture` behaves as expected.

use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_DIRECTIVE: &str = "launchconf=info";

/// Filter used by the test initializer when `RUST_LOG` is not set.
const TEST_DIRECTIVE: &str = "launchconf=trace";

fn env_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

/// Install a global stderr subscriber for this crate's events.
///
/// With `json_output` the events are emitted as JSON lines for log
/// collectors; otherwise a compact human-readable format is used. The
/// default `launchconf=info` filter can be overridden via `RUST_LOG`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed; call this once,
/// early, or not at all.
pub fn init(json_output: bool) {
    let builder = fmt()
        .with_env_filter(env_filter(DEFAULT_DIRECTIVE))
        .with_target(false)
        .with_writer(io::stderr);

    if json_output {
        builder.json().init();
    } else {
        builder.compact().init();
    }
}

/// Install a capture-friendly subscriber for tests.
///
/// Safe to call from every test; installation races are ignored so the
/// first caller wins.
pub fn init_for_tests() {
    let _ = fmt()
        .with_env_filter(env_filter(TEST_DIRECTIVE))
        .with_test_writer()
        .try_init();
}
