//! Global subscriber setup with a file sink
//!
//! Installing the global subscriber can only happen once per process, so
//! this file holds a single test.

use piilog::config::AppConfig;
use piilog::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_init_logging_writes_redacted_file_at_warn_level() {
    std::env::remove_var("RUST_LOG");
    let dir = TempDir::new().unwrap();

    let mut config = AppConfig::default();
    config.application.log_level = "warn".to_string();
    config.logging.console_enabled = false;
    config.logging.local_enabled = true;
    config.logging.local_path = dir.path().to_string_lossy().to_string();
    config.logging.local_rotation = "never".to_string();
    config.logging.local_file_name = "users.log".to_string();

    let guard = init_logging(&config).unwrap();
    piilog::log_user_data!("name=Ann; email=ann@example.com; ip=10.0.0.1;");
    tracing::warn!(target: "auth", password = "hunter2", "login");
    tracing::info!(target: "auth", "below the configured level");

    // A second global subscriber is refused
    assert!(init_logging(&config).is_err());

    drop(guard);

    let contents = std::fs::read_to_string(dir.path().join("users.log")).unwrap();
    assert!(contents.contains("[HOLBERTON] user_data INFO "));
    assert!(contents.contains(": name=***; email=***; ip=10.0.0.1;\n"));
    assert!(contents.contains("auth WARN"));
    assert!(!contents.contains("below the configured level"));
    assert!(contents.contains(": login password=***;\n"));
    assert!(!contents.contains("ann@example.com"));
    assert!(!contents.contains("hunter2"));
}
