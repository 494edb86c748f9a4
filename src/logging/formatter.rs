//! Redacting record formatter
//!
//! [`RedactingFormatter`] composes two steps: redaction of the user message
//! and a prefix strategy that renders the record metadata. The prefix is
//! never passed through the redactor, so a logger name or tag that happens
//! to look like `field=value;` is printed verbatim.

use crate::domain::{LogRecord, Result};
use crate::redaction::{Redactor, SensitiveFieldSet};
use std::fmt;
use std::sync::Arc;

/// Tag printed before every formatted line by default
pub const DEFAULT_PREFIX_TAG: &str = "[HOLBERTON]";

/// Renders the metadata prefix for a record
pub type PrefixFn = dyn Fn(&LogRecord) -> String + Send + Sync;

/// Build the standard prefix: `<tag> <name> <LEVEL> <asctime>: `
///
/// # Example
///
/// ```
/// use piilog::domain::LogRecord;
/// use piilog::logging::standard_prefix;
///
/// let prefix = standard_prefix("[HOLBERTON]");
/// let record = LogRecord::new("my_logger", tracing::Level::INFO, "hi");
/// assert!(prefix(&record).starts_with("[HOLBERTON] my_logger INFO "));
/// ```
pub fn standard_prefix(tag: impl Into<String>) -> impl Fn(&LogRecord) -> String + Send + Sync + 'static {
    let tag = tag.into();
    move |record: &LogRecord| {
        format!(
            "{} {} {} {}: ",
            tag,
            record.name,
            record.level,
            record.asctime()
        )
    }
}

/// Formats log records with sensitive field values replaced
#[derive(Clone)]
pub struct RedactingFormatter {
    redactor: Redactor,
    prefix: Arc<PrefixFn>,
}

impl RedactingFormatter {
    /// Formatter for `fields` with the default token, separator and prefix
    pub fn new(fields: SensitiveFieldSet) -> Result<Self> {
        Ok(Self::from_redactor(Redactor::with_defaults(fields)?))
    }

    /// Formatter around an existing redactor with the default prefix
    pub fn from_redactor(redactor: Redactor) -> Self {
        Self {
            redactor,
            prefix: Arc::new(standard_prefix(DEFAULT_PREFIX_TAG)),
        }
    }

    /// Use the standard prefix with a different tag
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_prefix(standard_prefix(tag))
    }

    /// Replace the prefix strategy
    pub fn with_prefix<F>(mut self, prefix: F) -> Self
    where
        F: Fn(&LogRecord) -> String + Send + Sync + 'static,
    {
        self.prefix = Arc::new(prefix);
        self
    }

    /// Redact the record message, then prepend the metadata prefix
    pub fn format(&self, record: &LogRecord) -> String {
        let message = self.redactor.redact(&record.message);
        let mut line = (self.prefix)(record);
        line.push_str(&message);
        line
    }

    /// Redact a bare message without any prefix
    pub fn redact_message(&self, message: &str) -> String {
        self.redactor.redact(message).into_owned()
    }

    /// Underlying redactor
    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }
}

impl fmt::Debug for RedactingFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedactingFormatter")
            .field("redactor", &self.redactor)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};
    use tracing::Level;

    fn record(name: &str, message: &str) -> LogRecord {
        let ts = Local.with_ymd_and_hms(2019, 11, 19, 18, 24, 25).unwrap();
        LogRecord::new(name, Level::INFO, message).with_timestamp(ts)
    }

    fn formatter(fields: &[&str]) -> RedactingFormatter {
        RedactingFormatter::new(SensitiveFieldSet::new(fields.iter().copied()).unwrap()).unwrap()
    }

    #[test]
    fn test_format_standard_layout() {
        let f = formatter(&["email", "ssn", "password"]);
        let line = f.format(&record(
            "my_logger",
            "name=Bob;email=bob@dylan.com;ssn=000-123-0000;password=bobby2019;",
        ));
        assert_eq!(
            line,
            "[HOLBERTON] my_logger INFO 2019-11-19 18:24:25,000: name=Bob;email=***;ssn=***;password=***;"
        );
    }

    #[test]
    fn test_prefix_is_never_redacted() {
        let f = formatter(&["name"]).with_prefix(|r: &LogRecord| format!("name={}; ", r.name));
        let line = f.format(&record("audit", "name=Alice;"));
        assert_eq!(line, "name=audit; name=***;");
    }

    #[test]
    fn test_custom_tag() {
        let f = formatter(&["ssn"]).with_tag("[users]");
        let line = f.format(&record("user_data", "ssn=1;"));
        assert!(line.starts_with("[users] user_data INFO "));
        assert!(line.ends_with(": ssn=***;"));
    }

    #[test]
    fn test_redact_message_only() {
        let f = formatter(&["phone"]);
        assert_eq!(f.redact_message("phone=555-1234;zip=12345;"), "phone=***;zip=12345;");
    }

    #[test]
    fn test_debug_does_not_panic() {
        let f = formatter(&["ssn"]);
        assert!(format!("{f:?}").contains("RedactingFormatter"));
    }
}
