//! Database abstraction traits

use crate::domain::{Result, UserRecord};
use async_trait::async_trait;

/// Source of `users` table rows
///
/// Implemented by the PostgreSQL adapter; tests provide in-memory sources.
#[async_trait]
pub trait UserSource: Send + Sync {
    /// Fetch every row of the users table, columns in table order
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or the query fails.
    async fn fetch_users(&self) -> Result<Vec<UserRecord>>;

    /// Short description of where rows come from, without credentials
    fn describe(&self) -> String;
}
