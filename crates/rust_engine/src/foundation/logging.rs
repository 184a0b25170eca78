//! Logging utilities

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system.
///
/// Defaults to `info` unless `RUST_LOG` says otherwise. Safe to call more
/// than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}
