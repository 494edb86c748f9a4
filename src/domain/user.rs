//! User table row model

/// Placeholder rendered for SQL NULL columns
pub const NULL_VALUE: &str = "NULL";

/// One row of the `users` table, columns kept in table order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    fields: Vec<(String, Option<String>)>,
}

impl UserRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column (builder style)
    pub fn with_field(mut self, column: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        self.push(column, value.map(Into::into));
        self
    }

    /// Append a column
    pub fn push(&mut self, column: impl Into<String>, value: Option<String>) {
        self.fields.push((column.into(), value));
    }

    /// Columns and values in table order
    pub fn fields(&self) -> &[(String, Option<String>)] {
        &self.fields
    }

    /// Number of columns
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no columns
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render as `col=value; col=value;`
    ///
    /// Every segment, including the last, ends with `;`. An empty record
    /// renders as `;`.
    pub fn to_log_message(&self) -> String {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(column, value)| format!("{}={}", column, value.as_deref().unwrap_or(NULL_VALUE)))
            .collect();
        format!("{};", parts.join("; "))
    }
}
