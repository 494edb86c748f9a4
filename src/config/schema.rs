//! Configuration schema types
//!
//! This module defines the configuration structure for piilog. Every
//! section has serde defaults, so an empty TOML document is a valid config.

use crate::config::{secret_string, SecretString};
use crate::domain::{PiiLogError, Result};
use crate::redaction::{Redactor, SensitiveFieldSet, DEFAULT_REDACTION, DEFAULT_SEPARATOR, PII_FIELDS};
use serde::{Deserialize, Serialize};

/// Root piilog configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Field redaction settings
    #[serde(default)]
    pub redaction: RedactionConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// User database connection
    #[serde(default)]
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Validates the configuration
    ///
    /// The database name is not required here; commands that connect check
    /// it through [`DatabaseConfig::database_name`].
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> std::result::Result<(), String> {
        self.application.validate()?;
        self.redaction.validate()?;
        self.logging.validate()?;
        self.database.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            log_level: default_log_level(),
        }
    }
}

/// Which fields to redact and how
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionConfig {
    /// Sensitive field names
    #[serde(default = "default_fields")]
    pub fields: Vec<String>,

    /// Replacement token
    #[serde(default = "default_token")]
    pub token: String,

    /// Segment separator (a single character)
    #[serde(default = "default_separator")]
    pub separator: char,
}

impl RedactionConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.fields.is_empty() {
            return Err("redaction.fields must list at least one field".to_string());
        }
        if let Some(field) = self.fields.iter().find(|f| f.contains(self.separator)) {
            return Err(format!(
                "redaction.fields entry '{}' contains the separator '{}'",
                field, self.separator
            ));
        }
        if self.token.contains(self.separator) {
            return Err(format!(
                "redaction.token must not contain the separator '{}'",
                self.separator
            ));
        }
        Ok(())
    }

    /// Configured fields as a [`SensitiveFieldSet`]
    pub fn field_set(&self) -> Result<SensitiveFieldSet> {
        SensitiveFieldSet::new(self.fields.iter().cloned())
    }

    /// Compile a [`Redactor`] from this section
    pub fn build_redactor(&self) -> Result<Redactor> {
        Redactor::new(self.field_set()?, self.token.clone(), self.separator)
    }
}

impl Default for RedactionConfig {
    fn default() -> Self {
        Self {
            fields: default_fields(),
            token: default_token(),
            separator: default_separator(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Tag printed at the start of every line
    #[serde(default = "default_prefix_tag")]
    pub prefix_tag: String,

    /// Write to stderr
    #[serde(default = "default_true")]
    pub console_enabled: bool,

    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,

    /// Log file name (prefix for rotated files)
    #[serde(default = "default_local_file_name")]
    pub local_file_name: String,
}

impl LoggingConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when local_enabled = true".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            prefix_tag: default_prefix_tag(),
            console_enabled: true,
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
            local_file_name: default_local_file_name(),
        }
    }
}

/// User database connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database user
    #[serde(default = "default_db_username")]
    pub username: String,

    /// Database password
    /// Stored securely in memory and automatically zeroized on drop
    #[serde(default = "default_db_password")]
    pub password: SecretString,

    /// Database host
    #[serde(default = "default_db_host")]
    pub host: String,

    /// Database port
    #[serde(default = "default_db_port")]
    pub port: u16,

    /// Database name (required to connect; no default)
    #[serde(default)]
    pub name: Option<String>,

    /// Maximum number of connections in the pool
    #[serde(default = "default_db_max_connections")]
    pub max_connections: usize,

    /// Connection timeout in seconds
    #[serde(default = "default_db_connection_timeout_seconds")]
    pub connection_timeout_seconds: u64,
}

impl DatabaseConfig {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.host.trim().is_empty() {
            return Err("database.host cannot be empty".to_string());
        }

        if self.max_connections == 0 || self.max_connections > 100 {
            return Err(format!(
                "database.max_connections must be between 1 and 100, got {}",
                self.max_connections
            ));
        }

        if self.connection_timeout_seconds == 0 {
            return Err("database.connection_timeout_seconds must be > 0".to_string());
        }

        if matches!(&self.name, Some(name) if name.trim().is_empty()) {
            return Err("database.name cannot be empty when set".to_string());
        }

        Ok(())
    }

    /// The database name, or a configuration error when it was never set
    ///
    /// # Errors
    ///
    /// Returns [`PiiLogError::Configuration`] naming `PERSONAL_DATA_DB_NAME`
    /// when no database name is configured.
    pub fn database_name(&self) -> Result<&str> {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => Ok(name),
            _ => Err(PiiLogError::Configuration(
                "Database name is required: set PERSONAL_DATA_DB_NAME or database.name".to_string(),
            )),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            username: default_db_username(),
            password: default_db_password(),
            host: default_db_host(),
            port: default_db_port(),
            name: None,
            max_connections: default_db_max_connections(),
            connection_timeout_seconds: default_db_connection_timeout_seconds(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "piilog".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_fields() -> Vec<String> {
    PII_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_token() -> String {
    DEFAULT_REDACTION.to_string()
}

fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

fn default_prefix_tag() -> String {
    "[HOLBERTON]".to_string()
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

fn default_local_file_name() -> String {
    "piilog.log".to_string()
}

fn default_db_username() -> String {
    "root".to_string()
}

fn default_db_password() -> SecretString {
    secret_string(String::new())
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_max_connections() -> usize {
    4
}

fn default_db_connection_timeout_seconds() -> u64 {
    30
}
