//! Logging bootstrap

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the environment (`RUST_LOG`)
pub fn init() {
    env_logger::init();
}

/// Initialize logging for tests; returns `false` if a logger was already set
pub fn try_init() -> bool {
    env_logger::builder().is_test(true).try_init().is_ok()
}
