//! External system integrations for piilog.
//!
//! - [`database`] - the [`database::UserSource`] abstraction and row logging
//! - [`postgresql`] - PostgreSQL implementation
//!
//! # Design Pattern
//!
//! Adapters isolate external dependencies behind a trait so the row-logging
//! path can be tested with in-memory sources.
//!
//! ```rust,no_run
//! use piilog::adapters::database::log_users;
//! use piilog::adapters::postgresql::PostgresUserSource;
//! use piilog::config::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let source = PostgresUserSource::new(&config.database)?;
//! let logged = log_users(&source).await?;
//! println!("{logged} rows");
//! # Ok(())
//! # }
//! ```

pub mod database;
pub mod postgresql;
