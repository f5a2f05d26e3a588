//! SQLite connection pool
//!
//! One pool per process, created in `App::new` and handed to every repository.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};

/// Open (creating if missing) the database described by `config`.
///
/// An in-memory database lives only as long as its connection, so that case
/// is pinned to a single connection that is never recycled.
pub async fn connect(config: &DatabaseConfig) -> RepositoryResult<SqlitePool> {
    let busy_timeout = Duration::from_secs(config.busy_timeout_secs);

    let pool = if config.is_in_memory() {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| RepositoryError::connection(format!("Invalid in-memory database options: {}", e)))?
            .busy_timeout(busy_timeout);
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await
    } else {
        let options = SqliteConnectOptions::new()
            .filename(&config.path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(busy_timeout);
        SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(busy_timeout)
            .connect_with(options)
            .await
    };

    let pool = pool.map_err(|e| {
        RepositoryError::connection(format!("Failed to open database {}: {}", config.path, e))
    })?;
    info!(path = %config.path, "Database pool ready");
    Ok(pool)
}
