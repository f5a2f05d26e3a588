use sqlx::SqlitePool;
use tracing::info;

use crate::repository::repository_error::{RepositoryError, RepositoryResult};

const CREATE_QUOTES: &str = r#"
    CREATE TABLE IF NOT EXISTS quotes (
        id TEXT PRIMARY KEY,
        client_name TEXT NOT NULL,
        client_email TEXT NOT NULL,
        client_phone TEXT NOT NULL DEFAULT '',
        service_type TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        price REAL NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        created_at TEXT NOT NULL
    )
"#;

const CREATE_RESERVATIONS: &str = r#"
    CREATE TABLE IF NOT EXISTS reservations (
        id TEXT PRIMARY KEY,
        client_name TEXT NOT NULL,
        client_email TEXT NOT NULL,
        client_phone TEXT NOT NULL DEFAULT '',
        service_type TEXT NOT NULL,
        "date" TEXT NOT NULL,
        "time" TEXT NOT NULL,
        description TEXT NOT NULL DEFAULT '',
        status TEXT NOT NULL DEFAULT 'confirmed',
        created_at TEXT NOT NULL
    )
"#;

const CREATE_INVOICES: &str = r#"
    CREATE TABLE IF NOT EXISTS invoices (
        id TEXT PRIMARY KEY,
        quote_id TEXT,
        client_name TEXT NOT NULL,
        client_email TEXT NOT NULL,
        service_type TEXT NOT NULL,
        amount REAL NOT NULL,
        status TEXT NOT NULL DEFAULT 'pending',
        invoice_date TEXT NOT NULL,
        created_at TEXT NOT NULL
    )
"#;

/// Create the three record tables. Idempotent.
pub async fn init_schema(pool: &SqlitePool) -> RepositoryResult<()> {
    for (table, ddl) in [
        ("quotes", CREATE_QUOTES),
        ("reservations", CREATE_RESERVATIONS),
        ("invoices", CREATE_INVOICES),
    ] {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            RepositoryError::database(format!("Failed to create {} table: {}", table, e))
        })?;
    }
    info!("Database schema ready");
    Ok(())
}
