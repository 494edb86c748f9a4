//! Domain error types
//!
//! This module defines the error hierarchy for piilog.
//! Errors never carry third-party types; driver and library failures are
//! converted to strings where they cross into the domain.

use thiserror::Error;

/// Main piilog error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum PiiLogError {
    /// Configuration-related errors (missing or invalid settings)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid input handed to a constructor or operation
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Password hashing or verification errors
    #[error("Password error: {0}")]
    Password(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Database-specific errors
///
/// Errors raised by the user-table lookup. These errors don't expose
/// the PostgreSQL driver types.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to build the connection pool
    #[error("Failed to create connection pool: {0}")]
    PoolCreationFailed(String),

    /// Failed to obtain a connection
    #[error("Failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<std::io::Error> for PiiLogError {
    fn from(err: std::io::Error) -> Self {
        PiiLogError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for PiiLogError {
    fn from(err: toml::de::Error) -> Self {
        PiiLogError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl From<bcrypt::BcryptError> for PiiLogError {
    fn from(err: bcrypt::BcryptError) -> Self {
        PiiLogError::Password(err.to_string())
    }
}
