//! Configuration loader with TOML parsing and environment variable overrides
//!
//! Precedence, lowest first: built-in defaults, the TOML file (after
//! `${VAR}` substitution), then environment variables.

use super::schema::AppConfig;
use super::secret::secret_string;
use crate::domain::errors::PiiLogError;
use crate::domain::result::Result;
use crate::redaction::SensitiveFieldSet;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Environment variable holding the database user
pub const ENV_DB_USERNAME: &str = "PERSONAL_DATA_DB_USERNAME";
/// Environment variable holding the database password
pub const ENV_DB_PASSWORD: &str = "PERSONAL_DATA_DB_PASSWORD";
/// Environment variable holding the database host
pub const ENV_DB_HOST: &str = "PERSONAL_DATA_DB_HOST";
/// Environment variable holding the database name
pub const ENV_DB_NAME: &str = "PERSONAL_DATA_DB_NAME";
/// Environment variable holding the database port
pub const ENV_DB_PORT: &str = "PERSONAL_DATA_DB_PORT";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AppConfig
/// 4. Applies environment variable overrides
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, TOML parsing fails, a
/// referenced environment variable is missing, or validation fails.
///
/// # Examples
///
/// ```no_run
/// use piilog::config::loader::load_config;
///
/// let config = load_config("piilog.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AppConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(PiiLogError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        PiiLogError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: AppConfig = toml::from_str(&contents)?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PiiLogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");
    Ok(config)
}

/// Builds configuration from defaults and environment variables only
///
/// # Errors
///
/// Returns an error if an override cannot be parsed or validation fails.
pub fn load_from_env() -> Result<AppConfig> {
    let mut config = AppConfig::default();
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        PiiLogError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| PiiLogError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(PiiLogError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides
///
/// Database settings use the `PERSONAL_DATA_DB_*` names; everything else
/// follows `PIILOG_<SECTION>_<KEY>`.
fn apply_env_overrides(config: &mut AppConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("PIILOG_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Redaction overrides
    if let Ok(val) = std::env::var("PIILOG_REDACTION_FIELDS") {
        let fields = SensitiveFieldSet::parse_list(&val)
            .map_err(|e| PiiLogError::Configuration(format!("PIILOG_REDACTION_FIELDS: {e}")))?;
        config.redaction.fields = fields.names().to_vec();
    }
    if let Ok(val) = std::env::var("PIILOG_REDACTION_TOKEN") {
        config.redaction.token = val;
    }
    if let Ok(val) = std::env::var("PIILOG_REDACTION_SEPARATOR") {
        config.redaction.separator = parse_separator(&val)?;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("PIILOG_LOGGING_PREFIX_TAG") {
        config.logging.prefix_tag = val;
    }
    if let Ok(val) = std::env::var("PIILOG_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            PiiLogError::Configuration(format!(
                "PIILOG_LOGGING_LOCAL_ENABLED must be true or false, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("PIILOG_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    // Database overrides
    if let Ok(val) = std::env::var(ENV_DB_USERNAME) {
        config.database.username = val;
    }
    if let Ok(val) = std::env::var(ENV_DB_PASSWORD) {
        config.database.password = secret_string(val);
    }
    if let Ok(val) = std::env::var(ENV_DB_HOST) {
        config.database.host = val;
    }
    if let Ok(val) = std::env::var(ENV_DB_NAME) {
        config.database.name = Some(val);
    }
    if let Ok(val) = std::env::var(ENV_DB_PORT) {
        config.database.port = val.parse().map_err(|_| {
            PiiLogError::Configuration(format!("{ENV_DB_PORT} must be a port number, got '{val}'"))
        })?;
    }
    if let Ok(val) = std::env::var("PIILOG_DATABASE_MAX_CONNECTIONS") {
        if let Ok(max) = val.parse() {
            config.database.max_connections = max;
        }
    }

    Ok(())
}

/// Parse a separator override; exactly one character is accepted
pub(crate) fn parse_separator(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(PiiLogError::Configuration(format!(
            "Separator must be a single character, got '{value}'"
        ))),
    }
}
