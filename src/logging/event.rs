//! `tracing` adapter for [`RedactingFormatter`]
//!
//! Each event becomes a [`LogRecord`]: the target is the logger name, the
//! `message` field plus any other fields (as `key=value<sep>` segments) make
//! up the message. The record then goes through the redacting formatter, so
//! structured fields such as `password = %pw` are scrubbed as well.

use super::formatter::RedactingFormatter;
use crate::domain::LogRecord;
use std::fmt::{self, Write as _};
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// Event format that writes one redacted line per event
#[derive(Debug, Clone)]
pub struct RedactingEventFormat {
    formatter: RedactingFormatter,
}

impl RedactingEventFormat {
    /// Wrap a formatter for use with `tracing_subscriber::fmt`
    pub fn new(formatter: RedactingFormatter) -> Self {
        Self { formatter }
    }

    /// Build the record an event would be formatted from
    pub fn record_for(&self, event: &Event<'_>) -> LogRecord {
        let mut visitor = MessageVisitor::new(self.formatter.redactor().separator());
        event.record(&mut visitor);

        let metadata = event.metadata();
        LogRecord::new(metadata.target(), *metadata.level(), visitor.finish())
    }
}

impl<S, N> FormatEvent<S, N> for RedactingEventFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let record = self.record_for(event);
        writeln!(writer, "{}", self.formatter.format(&record))
    }
}

/// Collects the message and remaining fields of an event
struct MessageVisitor {
    separator: char,
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn new(separator: char) -> Self {
        Self {
            separator,
            message: String::new(),
            fields: String::new(),
        }
    }

    fn push_field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{}={}{}", name, value, self.separator);
    }

    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }
}

impl Visit for MessageVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }
}
