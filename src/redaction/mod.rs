//! PII redaction for `field=value` log messages
//!
//! A log message is a run of `field=value<separator>` segments. For every
//! segment whose field is configured as sensitive, the value is replaced by
//! a fixed token. Field names, separators and segment count are preserved.
//!
//! # Example
//!
//! ```rust
//! use piilog::redaction::{Redactor, SensitiveFieldSet};
//!
//! # fn example() -> piilog::domain::Result<()> {
//! let redactor = Redactor::with_defaults(SensitiveFieldSet::default())?;
//! let out = redactor.redact("name=Alice;email=a@x.com;role=admin;");
//! assert_eq!(out, "name=***;email=***;role=admin;");
//! # Ok(())
//! # }
//! ```

pub mod fields;
pub mod filter;

pub use fields::{SensitiveFieldSet, PII_FIELDS};
pub use filter::{redact, Redactor};

/// Default replacement token
pub const DEFAULT_REDACTION: &str = "***";

/// Default segment separator
pub const DEFAULT_SEPARATOR: char = ';';
