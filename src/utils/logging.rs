//! Logger bootstrap plus conditional logging macros.
//!
//! Each module that logs through the macros declares two constants:
//! ```rust,ignore
//! const ENABLE_LOGS: bool = true;
//! const LOG_TARGET: &str = "lovematch::workflow";
//!
//! use crate::{log_info, log_warn};
//! log_info!("prediction finished");
//! ```
//! Flipping `ENABLE_LOGS` silences a noisy component without touching `RUST_LOG`.

/// Initialise `env_logger` once. `RUST_LOG` wins over the default level;
/// `LOVEMATCH_DEBUG=1` lowers the default to `Debug`.
pub fn init_logging() {
    let default_level = if debug_mode() {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(default_level);
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    // A second init (tests, re-entry from the shell) is harmless.
    let _ = builder.try_init();
}

pub fn debug_mode() -> bool {
    std::env::var("LOVEMATCH_DEBUG")
        .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::debug!(target: LOG_TARGET, $($arg)*);
        }
    };
}

/// Info record tagged with the calling module's `LOG_TARGET`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!(target: LOG_TARGET, $($arg)*);
        }
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!(target: LOG_TARGET, $($arg)*);
        }
    };
}

/// Error record tagged with the calling module's `LOG_TARGET`.
/// Used for causes that must never reach the user verbatim.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!(target: LOG_TARGET, $($arg)*);
        }
    };
}
