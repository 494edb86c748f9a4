//! PostgreSQL client implementation
//!
//! Reads the `users` table through a pooled connection. The query runs over
//! the simple query protocol so every column arrives as text, whatever its
//! SQL type.

use crate::adapters::database::UserSource;
use crate::config::DatabaseConfig;
use crate::domain::{DatabaseError, Result, UserRecord};
use async_trait::async_trait;
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod, Runtime};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::{NoTls, SimpleQueryMessage, SimpleQueryRow};

/// Query used to read user rows
pub const USERS_QUERY: &str = "SELECT * FROM users;";

/// PostgreSQL-backed [`UserSource`]
pub struct PostgresUserSource {
    /// Connection pool
    pool: Pool,

    /// `user@host:port/db`, never includes the password
    summary: String,
}

impl PostgresUserSource {
    /// Create a pooled source from resolved configuration
    ///
    /// No connection is opened here; the pool connects on first use.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when no database name is set, before
    /// any connection attempt, or a database error if the pool cannot be
    /// built.
    pub fn new(config: &DatabaseConfig) -> Result<Self> {
        let database = config.database_name()?;
        let timeout = Duration::from_secs(config.connection_timeout_seconds);

        let mut pg_config = tokio_postgres::Config::new();
        pg_config
            .user(&config.username)
            .host(&config.host)
            .port(config.port)
            .dbname(database)
            .connect_timeout(timeout);

        let password: &str = config.password.expose_secret().as_ref();
        if !password.is_empty() {
            pg_config.password(password);
        }

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(Runtime::Tokio1)
            .wait_timeout(Some(timeout))
            .create_timeout(Some(timeout))
            .recycle_timeout(Some(timeout))
            .build()
            .map_err(|e| DatabaseError::PoolCreationFailed(e.to_string()))?;

        let summary = format!(
            "{}@{}:{}/{}",
            config.username, config.host, config.port, database
        );

        Ok(Self { pool, summary })
    }

    /// Test the connection to PostgreSQL
    pub async fn test_connection(&self) -> Result<()> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(e.to_string()))?;

        client
            .simple_query("SELECT 1")
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        tracing::info!(database = %self.summary, "PostgreSQL connection test successful");
        Ok(())
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

#[async_trait]
impl UserSource for PostgresUserSource {
    async fn fetch_users(&self) -> Result<Vec<UserRecord>> {
        let client = self
            .pool
            .get()
            .await
            .map_err(|e| DatabaseError::ConnectionFailed(format!("{}: {}", self.summary, e)))?;

        let messages = client
            .simple_query(USERS_QUERY)
            .await
            .map_err(|e| DatabaseError::QueryFailed(e.to_string()))?;

        let users: Vec<UserRecord> = messages
            .iter()
            .filter_map(|message| match message {
                SimpleQueryMessage::Row(row) => Some(user_from_row(row)),
                _ => None,
            })
            .collect();

        tracing::debug!(rows = users.len(), "Fetched user rows");
        Ok(users)
    }

    fn describe(&self) -> String {
        format!("postgresql://{}", self.summary)
    }
}

fn user_from_row(row: &SimpleQueryRow) -> UserRecord {
    let mut user = UserRecord::new();
    for (idx, column) in row.columns().iter().enumerate() {
        user.push(column.name(), row.get(idx).map(str::to_string));
    }
    user
}
