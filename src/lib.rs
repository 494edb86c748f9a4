// piilog - PII-redacting log formatter
// Copyright (c) 2025 Piilog Contributors
// Licensed under the MIT License

//! # piilog - PII-redacting log formatting
//!
//! piilog keeps personally identifiable information out of logs. Log
//! messages made of `field=value;` segments pass through a formatter that
//! replaces the values of sensitive fields with a fixed token before the
//! line reaches any sink.
//!
//! ## Overview
//!
//! This library provides:
//! - **Redaction** of configured fields in `field=value` messages
//! - **Formatting** that composes redaction with a metadata prefix, usable
//!   directly or as a `tracing_subscriber` event format
//! - **Password hashing** and verification with bcrypt
//! - **User export** from a PostgreSQL `users` table through the redacting logger
//!
//! ## Architecture
//!
//! - [`redaction`] - Field sets and the redaction transform
//! - [`logging`] - Redacting formatter and subscriber setup
//! - [`password`] - bcrypt hashing
//! - [`adapters`] - Database integration
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use piilog::domain::LogRecord;
//! use piilog::logging::RedactingFormatter;
//! use piilog::redaction::SensitiveFieldSet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let fields = SensitiveFieldSet::new(["email", "ssn", "password"])?;
//! let formatter = RedactingFormatter::new(fields)?;
//!
//! let record = LogRecord::new(
//!     "my_logger",
//!     tracing::Level::INFO,
//!     "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobby2019;",
//! );
//! let line = formatter.format(&record);
//! assert!(line.ends_with("name=Bob;email=***;ssn=***;password=***;"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! With [`logging::init_logging`] installed, every `tracing` event is
//! formatted by the redacting formatter:
//!
//! ```rust,no_run
//! use piilog::config::AppConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let _guard = piilog::logging::init_logging(&config)?;
//!
//! piilog::log_user_data!("name=Ann;email=ann@example.com;");
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod password;
pub mod redaction;
