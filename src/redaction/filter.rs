//! Field-value redaction for `field=value;` log messages
//!
//! All configured field names are compiled into one alternation so a
//! message is scanned once, whatever the number of fields.

use super::fields::SensitiveFieldSet;
use super::{DEFAULT_REDACTION, DEFAULT_SEPARATOR};
use crate::domain::{PiiLogError, Result};
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Compiled redaction rule set
///
/// Cheap to share: holds only immutable state and is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct Redactor {
    fields: SensitiveFieldSet,
    token: String,
    separator: char,
    pattern: Regex,
}

impl Redactor {
    /// Compile a redactor for `fields`, replacing values with `token`
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the combined pattern cannot be
    /// compiled (for example when it exceeds the regex size limit).
    pub fn new(fields: SensitiveFieldSet, token: impl Into<String>, separator: char) -> Result<Self> {
        let names: Vec<&str> = fields.iter().collect();
        let pattern = compile_pattern(&names, separator)?;

        Ok(Self {
            fields,
            token: token.into(),
            separator,
            pattern,
        })
    }

    /// Redactor for the given fields with the `***` token and `;` separator
    pub fn with_defaults(fields: SensitiveFieldSet) -> Result<Self> {
        Self::new(fields, DEFAULT_REDACTION, DEFAULT_SEPARATOR)
    }

    /// Replace the value of every sensitive segment in `message`
    ///
    /// Borrows the input untouched when nothing matched.
    pub fn redact<'a>(&self, message: &'a str) -> Cow<'a, str> {
        replace_values(&self.pattern, message, &self.token, self.separator)
    }

    /// Configured field set
    pub fn fields(&self) -> &SensitiveFieldSet {
        &self.fields
    }

    /// Replacement token
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Segment separator
    pub fn separator(&self) -> char {
        self.separator
    }
}

/// Redact `message` in one call, compiling the pattern on the fly
///
/// Prefer [`Redactor`] when the same fields are applied to many messages.
/// An empty field list leaves the message unchanged.
///
/// # Example
///
/// ```
/// use piilog::redaction::redact;
///
/// let out = redact("name=Alice;email=a@x.com;role=admin;", &["name", "email"], "***", ';').unwrap();
/// assert_eq!(out, "name=***;email=***;role=admin;");
/// ```
pub fn redact<S: AsRef<str>>(
    message: &str,
    fields: &[S],
    token: &str,
    separator: char,
) -> Result<String> {
    if fields.is_empty() {
        return Ok(message.to_string());
    }

    let names: Vec<&str> = fields.iter().map(AsRef::as_ref).collect();
    let pattern = compile_pattern(&names, separator)?;
    Ok(replace_values(&pattern, message, token, separator).into_owned())
}

fn replace_values<'a>(pattern: &Regex, message: &'a str, token: &str, separator: char) -> Cow<'a, str> {
    pattern.replace_all(message, |caps: &Captures| {
        format!("{}={}{}", &caps["field"], token, separator)
    })
}

/// Build `(?P<field>name_a|name_b)=.*?<sep>`
///
/// Names match anywhere, so `name` also covers `full_name=`. Longer names
/// come first: with `pass` and `password` configured, `password=` is
/// matched by the full name.
fn compile_pattern(names: &[&str], separator: char) -> Result<Regex> {
    let mut ordered: Vec<&str> = names.to_vec();
    ordered.sort_by(|a, b| b.len().cmp(&a.len()));

    let alternation = ordered
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|");

    let separator = regex::escape(&separator.to_string());
    let source = format!(r"(?P<field>{alternation})=.*?{separator}");

    Regex::new(&source).map_err(|e| {
        PiiLogError::Configuration(format!("Failed to compile redaction pattern: {e}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn redactor(fields: &[&str]) -> Redactor {
        Redactor::with_defaults(SensitiveFieldSet::new(fields.iter().copied()).unwrap()).unwrap()
    }

    #[test]
    fn test_redacts_all_configured_fields() {
        let r = redactor(&["name", "email", "phone"]);
        assert_eq!(
            r.redact("name=Alice;email=a@x.com;phone=555;"),
            "name=***;email=***;phone=***;"
        );
    }

    #[test]
    fn test_unmatched_message_is_borrowed() {
        let r = redactor(&["ssn"]);
        let input = "role=admin;ip=10.0.0.1;";
        let out = r.redact(input);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, input);
    }

    #[test]
    fn test_non_greedy_repeated_field() {
        let r = redactor(&["password"]);
        assert_eq!(
            r.redact("password=abc;password=def;"),
            "password=***;password=***;"
        );
    }

    #[test]
    fn test_idempotent() {
        let r = redactor(&["name", "email"]);
        let once = r.redact("name=Bob;email=bob@x.com;age=40;").into_owned();
        let twice = r.redact(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_preserves_segment_count() {
        let r = redactor(&["name", "ssn"]);
        let input = "name=Ann;ssn=123-45-6789;user_agent=Mozilla/5.0;";
        let out = r.redact(input);
        assert_eq!(out.matches(';').count(), input.matches(';').count());
    }

    #[test_case(&["pass", "password"], "password=xyz;", "password=***;" ; "longer name present")]
    #[test_case(&["pass", "password"], "pass=xyz;password=abc;", "pass=***;password=***;" ; "both names present")]
    #[test_case(&["pass"], "password=xyz;", "password=xyz;" ; "prefix does not match longer field")]
    #[test_case(&["name"], "username=bob;name=Bob;", "username=***;name=***;" ; "name embedded in longer key")]
    fn test_overlapping_names(fields: &[&str], input: &str, expected: &str) {
        assert_eq!(redactor(fields).redact(input), expected);
    }

    #[test]
    fn test_missing_trailing_separator_untouched() {
        let r = redactor(&["email"]);
        assert_eq!(r.redact("name=x;email=a@x.com"), "name=x;email=a@x.com");
    }

    #[test]
    fn test_space_after_separator() {
        let r = redactor(&["name", "email"]);
        assert_eq!(
            r.redact("name=Ann Lee; email=ann@x.com; last_login=2019-11-14;"),
            "name=***; email=***; last_login=2019-11-14;"
        );
    }

    #[test]
    fn test_custom_token_and_separator() {
        let fields = SensitiveFieldSet::new(["ssn"]).unwrap();
        let r = Redactor::new(fields, "[REDACTED]", '|').unwrap();
        assert_eq!(r.redact("ssn=1|name=x|"), "ssn=[REDACTED]|name=x|");
    }

    #[test]
    fn test_token_with_dollar_is_literal() {
        let fields = SensitiveFieldSet::new(["ssn"]).unwrap();
        let r = Redactor::new(fields, "$0", ';').unwrap();
        assert_eq!(r.redact("ssn=1;"), "ssn=$0;");
    }

    #[test]
    fn test_regex_metacharacter_separator() {
        let fields = SensitiveFieldSet::new(["email"]).unwrap();
        let r = Redactor::new(fields, "***", '.').unwrap();
        assert_eq!(r.redact("email=a@x.name=b."), "email=***.name=b.");
    }

    #[test]
    fn test_free_function() {
        let out = redact(
            "name=egg;email=eggmin@eggsample.com;password=eggcellent;date_of_birth=12/12/1986;",
            &["password", "date_of_birth"],
            "xxx",
            ';',
        )
        .unwrap();
        assert_eq!(
            out,
            "name=egg;email=eggmin@eggsample.com;password=xxx;date_of_birth=xxx;"
        );
    }

    #[test]
    fn test_free_function_empty_fields() {
        let out = redact::<&str>("password=abc;", &[], "***", ';').unwrap();
        assert_eq!(out, "password=abc;");
    }

    #[test]
    fn test_value_does_not_span_lines() {
        let r = redactor(&["password"]);
        assert_eq!(r.redact("password=abc\nname=x;"), "password=abc\nname=x;");
    }
}
