//! Domain models and types for piilog.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Log records** ([`LogRecord`]) handed to the redacting formatter
//! - **User rows** ([`UserRecord`]) read from the `users` table
//! - **Error types** ([`PiiLogError`], [`DatabaseError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, PiiLogError>`]:
//!
//! ```rust
//! use piilog::domain::{PiiLogError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = piilog::config::AppConfig::from_env()?;
//!     config.validate().map_err(PiiLogError::Configuration)?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod record;
pub mod result;
pub mod user;

pub use errors::{DatabaseError, PiiLogError};
pub use record::LogRecord;
pub use result::Result;
pub use user::UserRecord;
