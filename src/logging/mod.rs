//! Logging and PII redaction formatting
//!
//! This module provides:
//! - [`RedactingFormatter`]: message redaction composed with a metadata prefix
//! - [`RedactingEventFormat`]: the same formatter plugged into `tracing_subscriber`
//! - [`init_logging`]: console and rolling-file subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use piilog::config::AppConfig;
//! use piilog::logging::init_logging;
//!
//! let config = AppConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//!
//! piilog::log_user_data!("name=Bob;email=bob@dylan.com;");
//! ```

pub mod event;
pub mod formatter;
pub mod structured;

pub use event::RedactingEventFormat;
pub use formatter::{standard_prefix, PrefixFn, RedactingFormatter, DEFAULT_PREFIX_TAG};
pub use structured::{build_formatter, init_logging, pin_user_data, LoggingGuard};

/// Logger name for user records
pub const USER_DATA_TARGET: &str = "user_data";

/// Log a user record message at INFO on the `user_data` logger
///
/// # Example
///
/// ```no_run
/// use piilog::log_user_data;
///
/// log_user_data!("name={};ssn={};", "Ann", "000-11-2222");
/// ```
#[macro_export]
macro_rules! log_user_data {
    ($($arg:tt)+) => {
        tracing::info!(target: $crate::logging::USER_DATA_TARGET, $($arg)+)
    };
}
