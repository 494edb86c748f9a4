//! Configuration management for piilog.
//!
//! # Overview
//!
//! piilog reads an optional TOML file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - Default values for every setting
//! - Environment overrides (`PERSONAL_DATA_DB_*`, `PIILOG_*`)
//! - Validation on load
//!
//! Without a file, [`AppConfig::from_env`] resolves defaults plus overrides
//! once at startup.
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [redaction]
//! fields = ["name", "email", "phone", "ssn", "password"]
//! token = "***"
//! separator = ";"
//!
//! [logging]
//! prefix_tag = "[HOLBERTON]"
//!
//! [database]
//! username = "root"
//! password = "${PERSONAL_DATA_DB_PASSWORD}"
//! host = "localhost"
//! name = "my_db"
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

use crate::domain::Result;
use std::path::Path;

pub use loader::{load_config, load_from_env};
pub use schema::{AppConfig, ApplicationConfig, DatabaseConfig, LoggingConfig, RedactionConfig};
pub use secret::{secret_string, SecretString, SecretValue};

impl AppConfig {
    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        load_config(path)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Result<Self> {
        load_from_env()
    }

    /// From `path` when given, otherwise from the environment
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::from_env(),
        }
    }
}
