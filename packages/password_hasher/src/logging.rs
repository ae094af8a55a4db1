//! Logging setup
//!
//! The crate emits `tracing` events, which are forwarded to the `log` facade
//! when no tracing subscriber is installed. These helpers install
//! `env_logger` for applications and tests that do not bring their own.
//! Levels come from `RUST_LOG`, e.g. `RUST_LOG=password_hasher=debug`.

use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Install `env_logger` once for the process
///
/// Does nothing if another logger is already registered.
pub fn init() {
    INIT_LOGGER.call_once(|| {
        if env_logger::Builder::from_default_env()
            .format_timestamp_micros()
            .try_init()
            .is_ok()
        {
            log::debug!("password hasher logging initialized");
        }
    });
}

/// Install a test-friendly logger, ignoring repeated calls
pub fn init_test() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}
