//! Users command implementation
//!
//! Reads the `users` table and logs each row through the redacting
//! `user_data` logger.

use crate::adapters::database::log_users;
use crate::adapters::postgresql::PostgresUserSource;
use crate::config::AppConfig;
use clap::Args;

/// Arguments for the users command
#[derive(Args, Debug)]
pub struct UsersArgs {
    /// Check connectivity only, do not log rows
    #[arg(long)]
    pub check: bool,
}

impl UsersArgs {
    /// Execute the users command
    pub async fn execute(&self, config: &AppConfig) -> anyhow::Result<i32> {
        let source = match PostgresUserSource::new(&config.database) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        if self.check {
            return match source.test_connection().await {
                Ok(()) => Ok(0),
                Err(e) => {
                    eprintln!("❌ {e}");
                    Ok(4)
                }
            };
        }

        match log_users(&source).await {
            Ok(count) => {
                tracing::debug!(count, "Users command finished");
                Ok(0)
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read users");
                Ok(4)
            }
        }
    }
}
