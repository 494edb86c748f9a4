//! Redact command implementation
//!
//! Redacts `field=value` messages given as arguments, or line by line from
//! stdin, and prints the result on stdout.

use crate::config::AppConfig;
use crate::domain::{LogRecord, PiiLogError};
use crate::logging::{build_formatter, RedactingFormatter, USER_DATA_TARGET};
use crate::redaction::SensitiveFieldSet;
use clap::Args;
use std::io::{self, BufRead, Write};
use tracing::Level;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Messages to redact; stdin is read when none are given
    pub messages: Vec<String>,

    /// Comma-separated field names (overrides configuration)
    #[arg(long)]
    pub fields: Option<String>,

    /// Replacement token (overrides configuration)
    #[arg(long)]
    pub token: Option<String>,

    /// Segment separator (overrides configuration)
    #[arg(long)]
    pub separator: Option<char>,

    /// Prepend the log prefix (tag, logger name, level, time)
    #[arg(long)]
    pub with_prefix: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config: &AppConfig) -> anyhow::Result<i32> {
        let formatter = match self.formatter(config) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let stdout = io::stdout();
        let mut out = stdout.lock();

        let count = if self.messages.is_empty() {
            let stdin = io::stdin();
            redact_lines(&formatter, self.with_prefix, stdin.lock(), &mut out)?
        } else {
            for message in &self.messages {
                writeln!(out, "{}", render(&formatter, self.with_prefix, message))?;
            }
            self.messages.len()
        };

        tracing::debug!(count, "Messages redacted");
        Ok(0)
    }

    /// Formatter from configuration with command-line overrides applied
    fn formatter(&self, config: &AppConfig) -> crate::domain::Result<RedactingFormatter> {
        let mut config = config.clone();
        if let Some(fields) = &self.fields {
            config.redaction.fields = SensitiveFieldSet::parse_list(fields)?.names().to_vec();
        }
        if let Some(token) = &self.token {
            config.redaction.token = token.clone();
        }
        if let Some(separator) = self.separator {
            config.redaction.separator = separator;
        }
        config.validate().map_err(PiiLogError::Configuration)?;
        build_formatter(&config)
    }
}

fn render(formatter: &RedactingFormatter, with_prefix: bool, message: &str) -> String {
    if with_prefix {
        formatter.format(&LogRecord::new(USER_DATA_TARGET, Level::INFO, message))
    } else {
        formatter.redact_message(message)
    }
}

/// Redact every line of `reader` into `writer`, returning the line count
pub fn redact_lines<R: BufRead, W: Write>(
    formatter: &RedactingFormatter,
    with_prefix: bool,
    reader: R,
    writer: &mut W,
) -> io::Result<usize> {
    let mut count = 0;
    for line in reader.lines() {
        let line = line?;
        writeln!(writer, "{}", render(formatter, with_prefix, &line))?;
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(fields: Option<&str>) -> RedactArgs {
        RedactArgs {
            messages: Vec::new(),
            fields: fields.map(str::to_string),
            token: None,
            separator: None,
            with_prefix: false,
        }
    }

    #[test]
    fn test_redact_lines() {
        let formatter = args(None).formatter(&AppConfig::default()).unwrap();
        let input = "name=Ann;email=a@x.com;role=admin;\nssn=1;\n";
        let mut out = Vec::new();

        let count = redact_lines(&formatter, false, input.as_bytes(), &mut out).unwrap();

        assert_eq!(count, 2);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name=***;email=***;role=admin;\nssn=***;\n"
        );
    }

    #[test]
    fn test_field_override() {
        let formatter = args(Some("role")).formatter(&AppConfig::default()).unwrap();
        assert_eq!(
            formatter.redact_message("name=Ann;role=admin;"),
            "name=Ann;role=***;"
        );
    }

    #[test]
    fn test_with_prefix() {
        let formatter = args(None).formatter(&AppConfig::default()).unwrap();
        let line = render(&formatter, true, "phone=555;");
        assert!(line.starts_with("[HOLBERTON] user_data INFO "));
        assert!(line.ends_with(": phone=***;"));
    }

    #[test]
    fn test_blank_field_override_rejected() {
        assert!(args(Some(" , ")).formatter(&AppConfig::default()).is_err());
    }

    #[test]
    fn test_token_containing_separator_rejected() {
        let mut with_token = args(None);
        with_token.token = Some(";".to_string());
        assert!(matches!(
            with_token.formatter(&AppConfig::default()),
            Err(PiiLogError::Configuration(_))
        ));
    }

    #[test]
    fn test_field_containing_separator_rejected() {
        let mut with_separator = args(Some("ssn,a|b"));
        with_separator.separator = Some('|');
        assert!(with_separator.formatter(&AppConfig::default()).is_err());
    }

    #[tokio::test]
    async fn test_invalid_override_exits_with_config_error() {
        let mut with_token = args(None);
        with_token.token = Some("x;y".to_string());
        with_token.messages = vec!["ssn=1;".to_string()];
        assert_eq!(with_token.execute(&AppConfig::default()).await.unwrap(), 2);
    }
}
