//! Subscriber setup using tracing
//!
//! Installs the redacting event format on a stderr console layer and, when
//! enabled, on a rolling file layer.
//!
//! # Example
//!
//! ```no_run
//! use piilog::config::AppConfig;
//! use piilog::logging::init_logging;
//!
//! let config = AppConfig::default();
//! let _guard = init_logging(&config).expect("Failed to initialize logging");
//! ```

use super::event::RedactingEventFormat;
use super::formatter::RedactingFormatter;
use super::USER_DATA_TARGET;
use crate::config::{AppConfig, LoggingConfig};
use crate::domain::{PiiLogError, Result};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Guard that must be kept alive for the duration of the program
/// to ensure file logs are flushed properly
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

impl LoggingGuard {
    fn new(file_guard: Option<WorkerGuard>) -> Self {
        Self {
            _file_guard: file_guard,
        }
    }
}

/// Build the redacting formatter described by the configuration
pub fn build_formatter(config: &AppConfig) -> Result<RedactingFormatter> {
    let redactor = config.redaction.build_redactor()?;
    Ok(RedactingFormatter::from_redactor(redactor).with_tag(config.logging.prefix_tag.clone()))
}

/// Initialize the logging system based on configuration
///
/// `RUST_LOG` takes precedence over `application.log_level`. The
/// `user_data` logger always passes INFO, whatever the global level.
///
/// # Errors
///
/// Returns an error for an unknown log level, an unusable log directory,
/// or when a global subscriber is already installed.
pub fn init_logging(config: &AppConfig) -> Result<LoggingGuard> {
    let log_level = parse_log_level(&config.application.log_level)?;
    let formatter = build_formatter(config)?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_str().to_lowercase()));
    let env_filter = pin_user_data(env_filter)?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if config.logging.console_enabled {
        let console_layer = tracing_subscriber::fmt::layer()
            .event_format(RedactingEventFormat::new(formatter.clone()))
            .with_writer(std::io::stderr)
            .with_filter(env_filter.clone());
        layers.push(console_layer.boxed());
    }

    let file_guard = if config.logging.local_enabled {
        let (file_layer, guard) = file_layer(&config.logging, formatter, env_filter)?;
        layers.push(file_layer);
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| PiiLogError::Logging(format!("Failed to install subscriber: {e}")))?;

    tracing::debug!(
        level = %log_level,
        local_enabled = config.logging.local_enabled,
        local_path = %config.logging.local_path,
        "Logging initialized"
    );

    Ok(LoggingGuard::new(file_guard))
}

/// Add a directive keeping the `user_data` logger at INFO
///
/// # Errors
///
/// Returns a logging error if the directive cannot be parsed.
pub fn pin_user_data(filter: EnvFilter) -> Result<EnvFilter> {
    let directive = format!("{USER_DATA_TARGET}=info")
        .parse()
        .map_err(|e| PiiLogError::Logging(format!("Invalid filter directive: {e}")))?;
    Ok(filter.add_directive(directive))
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

fn file_layer(
    config: &LoggingConfig,
    formatter: RedactingFormatter,
    filter: EnvFilter,
) -> Result<(BoxedLayer, WorkerGuard)> {
    std::fs::create_dir_all(&config.local_path).map_err(|e| {
        PiiLogError::Configuration(format!(
            "Failed to create log directory {}: {}",
            config.local_path, e
        ))
    })?;

    let appender = RollingFileAppender::new(
        parse_rotation(&config.local_rotation),
        &config.local_path,
        &config.local_file_name,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let layer = tracing_subscriber::fmt::layer()
        .event_format(RedactingEventFormat::new(formatter))
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(filter);

    Ok((layer.boxed(), guard))
}

fn parse_rotation(rotation: &str) -> Rotation {
    match rotation {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}

/// Parse log level from string
pub(crate) fn parse_log_level(level_str: &str) -> Result<Level> {
    match level_str.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(PiiLogError::Configuration(format!(
            "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
            level_str
        ))),
    }
}
