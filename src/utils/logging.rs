//! Logging macros gated by a module-level `ENABLE_LOGS` flag.
//!
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_info, log_warn};
//!
//! log_warn!("snapshot dropped for sample at {}", timestamp);
//! ```

/// `log::info!` when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// `log::warn!` when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// `log::error!` when the calling module's `ENABLE_LOGS` is true.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}

/// Install the `env_logger` backend. `RUST_LOG` overrides the Info default.
pub fn init() {
    let _ = env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init();
}
