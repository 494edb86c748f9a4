//! Sensitive field set

use crate::domain::{PiiLogError, Result};
use std::fmt;

/// Fields treated as PII when nothing else is configured
pub const PII_FIELDS: [&str; 5] = ["name", "email", "phone", "ssn", "password"];

/// Ordered, de-duplicated set of field names whose values get redacted
///
/// Immutable once built. Field names should not contain the segment
/// separator; anything else is matched literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SensitiveFieldSet {
    names: Vec<String>,
}

impl SensitiveFieldSet {
    /// Build a field set, keeping first-seen order and dropping duplicates
    ///
    /// # Errors
    ///
    /// Returns a validation error if no field names are supplied or if a
    /// name is empty.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if name.is_empty() {
                return Err(PiiLogError::Validation(
                    "Sensitive field names must not be empty".to_string(),
                ));
            }
            if !unique.contains(&name) {
                unique.push(name);
            }
        }

        if unique.is_empty() {
            return Err(PiiLogError::Validation(
                "At least one sensitive field must be configured".to_string(),
            ));
        }

        Ok(Self { names: unique })
    }

    /// Parse a comma-separated list such as `name,email,ssn`
    pub fn parse_list(list: &str) -> Result<Self> {
        Self::new(
            list.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty()),
        )
    }

    /// Field names in configured order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Iterate over field names
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Whether `name` is configured as sensitive
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Number of configured fields
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed set; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for SensitiveFieldSet {
    fn default() -> Self {
        Self {
            names: PII_FIELDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl fmt::Display for SensitiveFieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(","))
    }
}

impl<'a> IntoIterator for &'a SensitiveFieldSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}
