use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tracing::info;

use crate::kv;

/// Creates a SQLite connection pool and ensures the record tables exist.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    info!("Connecting to SQLite...");

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Each entity type gets its own key→record table. Records are stored whole,
/// serialized as JSON; there is no other schema.
async fn init_schema(pool: &SqlitePool) -> Result<()> {
    for table in [kv::ACTIVITIES, kv::PARTICIPANTS] {
        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {table} (id TEXT PRIMARY KEY, record TEXT NOT NULL)"
        ))
        .execute(pool)
        .await?;
    }
    Ok(())
}

/// In-memory pool for tests. A single connection keeps every query on the
/// same `:memory:` database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory SQLite pool");
    init_schema(&pool).await.expect("schema init");
    pool
}
