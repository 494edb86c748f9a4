//! Database abstraction layer
//!
//! The user lookup only needs one capability, reading the `users` table, so
//! the abstraction is the single [`UserSource`] trait.

pub mod traits;

pub use traits::UserSource;

use crate::domain::Result;

/// Log every user row through the `user_data` logger
///
/// Each row is rendered as `col=value; col=value;` and emitted at INFO; the
/// installed redacting formatter scrubs the sensitive columns. Returns the
/// number of rows logged.
///
/// # Errors
///
/// Returns the source's error if the rows cannot be fetched.
pub async fn log_users(source: &dyn UserSource) -> Result<usize> {
    tracing::debug!(source = %source.describe(), "Fetching user rows");

    let users = source.fetch_users().await?;
    for user in &users {
        crate::log_user_data!("{}", user.to_log_message());
    }

    tracing::debug!(count = users.len(), "User rows logged");
    Ok(users.len())
}
