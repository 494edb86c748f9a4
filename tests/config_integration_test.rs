//! Integration tests for configuration loading and validation
//!
//! Tests that modify environment variables hold ENV_MUTEX so they do not
//! interfere with each other.

use piilog::config::{load_config, load_from_env, AppConfig};
use piilog::domain::PiiLogError;
use secrecy::ExposeSecret;
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    for var in [
        "PIILOG_APPLICATION_LOG_LEVEL",
        "PIILOG_REDACTION_FIELDS",
        "PIILOG_REDACTION_TOKEN",
        "PIILOG_REDACTION_SEPARATOR",
        "PIILOG_LOGGING_PREFIX_TAG",
        "PERSONAL_DATA_DB_USERNAME",
        "PERSONAL_DATA_DB_PASSWORD",
        "PERSONAL_DATA_DB_HOST",
        "PERSONAL_DATA_DB_NAME",
        "PERSONAL_DATA_DB_PORT",
        "TEST_PIILOG_DB_PASSWORD",
    ] {
        std::env::remove_var(var);
    }
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[application]
log_level = "debug"

[redaction]
fields = ["email", "ssn"]
token = "[REDACTED]"
separator = "|"

[logging]
prefix_tag = "[AUDIT]"
console_enabled = true
local_enabled = false

[database]
username = "reader"
password = "s3cret"
host = "db.internal"
port = 5433
name = "my_db"
max_connections = 2
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.redaction.fields, vec!["email", "ssn"]);
    assert_eq!(config.redaction.token, "[REDACTED]");
    assert_eq!(config.redaction.separator, '|');
    assert_eq!(config.logging.prefix_tag, "[AUDIT]");
    assert_eq!(config.database.username, "reader");
    assert_eq!(config.database.host, "db.internal");
    assert_eq!(config.database.port, 5433);
    assert_eq!(config.database.database_name().unwrap(), "my_db");
    assert!(config.database.password.expose_secret() == "s3cret");

    let redactor = config.redaction.build_redactor().unwrap();
    assert_eq!(redactor.redact("email=a@b.c|ip=1|"), "email=[REDACTED]|ip=1|");
}

#[test]
fn test_empty_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config("");
    let config = load_config(file.path()).unwrap();

    assert_eq!(
        config.redaction.fields,
        vec!["name", "email", "phone", "ssn", "password"]
    );
    assert_eq!(config.redaction.token, "***");
    assert_eq!(config.redaction.separator, ';');
    assert_eq!(config.database.username, "root");
    assert_eq!(config.database.host, "localhost");
    assert!(config.database.password.expose_secret().is_empty());
    assert!(config.database.name.is_none());
}

#[test]
fn test_env_substitution_in_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("TEST_PIILOG_DB_PASSWORD", "from-env");

    let file = write_config(
        r#"
# password comes from ${TEST_PIILOG_DB_PASSWORD}
[database]
password = "${TEST_PIILOG_DB_PASSWORD}"
name = "my_db"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert!(config.database.password.expose_secret() == "from-env");
    cleanup_env_vars();
}

#[test]
fn test_missing_substitution_variable() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[database]
password = "${TEST_PIILOG_DB_PASSWORD}"
"#,
    );

    let err = load_config(file.path()).unwrap_err();
    assert!(err.to_string().contains("TEST_PIILOG_DB_PASSWORD"));
}

#[test]
fn test_database_env_overrides_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PERSONAL_DATA_DB_USERNAME", "holberton");
    std::env::set_var("PERSONAL_DATA_DB_HOST", "10.0.0.5");
    std::env::set_var("PERSONAL_DATA_DB_NAME", "my_db");
    std::env::set_var("PERSONAL_DATA_DB_PORT", "6543");

    let file = write_config(
        r#"
[database]
username = "root"
host = "localhost"
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.database.username, "holberton");
    assert_eq!(config.database.host, "10.0.0.5");
    assert_eq!(config.database.port, 6543);
    assert_eq!(config.database.database_name().unwrap(), "my_db");
    cleanup_env_vars();
}

#[test]
fn test_env_only_config() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PIILOG_REDACTION_FIELDS", "ssn, password");
    std::env::set_var("PIILOG_LOGGING_PREFIX_TAG", "[TEST]");

    let config = load_from_env().unwrap();
    assert_eq!(config.redaction.fields, vec!["ssn", "password"]);
    assert_eq!(config.logging.prefix_tag, "[TEST]");
    assert!(config.database.database_name().is_err());

    let resolved = AppConfig::resolve(None).unwrap();
    assert_eq!(resolved.redaction.fields, config.redaction.fields);
    cleanup_env_vars();
}

#[test]
fn test_missing_database_name_is_configuration_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let config = load_from_env().unwrap();
    match config.database.database_name() {
        Err(PiiLogError::Configuration(msg)) => assert!(msg.contains("PERSONAL_DATA_DB_NAME")),
        other => panic!("expected configuration error, got {other:?}"),
    }
}

#[test]
fn test_invalid_port_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PERSONAL_DATA_DB_PORT", "not-a-port");

    let result = load_from_env();
    cleanup_env_vars();
    assert!(matches!(result, Err(PiiLogError::Configuration(_))));
}

#[test]
fn test_invalid_separator_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();
    std::env::set_var("PIILOG_REDACTION_SEPARATOR", ";;");

    let result = load_from_env();
    cleanup_env_vars();
    assert!(result.is_err());
}

#[test]
fn test_empty_field_list_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    cleanup_env_vars();

    let file = write_config(
        r#"
[redaction]
fields = []
"#,
    );

    assert!(load_config(file.path()).is_err());
}

#[test]
fn test_missing_file() {
    let err = load_config("/nonexistent/piilog.toml").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
