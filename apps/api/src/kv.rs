//! Serialized-record key-value tables over SQLite.
//!
//! Each entity type lives in its own two-column table (`id TEXT PRIMARY KEY`,
//! `record TEXT NOT NULL`) holding the whole record as JSON. `values`
//! iterates in key order, so listing output is stable across runs.

use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::AppError;

pub const ACTIVITIES: &str = "activities";
pub const PARTICIPANTS: &str = "participants";

/// Looks up a record by id. `None` means the key is absent.
pub async fn get<T: DeserializeOwned>(
    pool: &SqlitePool,
    table: &str,
    id: &str,
) -> Result<Option<T>, AppError> {
    let raw: Option<String> =
        sqlx::query_scalar(&format!("SELECT record FROM {table} WHERE id = ?"))
            .bind(id)
            .fetch_optional(pool)
            .await?;

    match raw {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Inserts or overwrites the record stored under `id`.
pub async fn put<T: Serialize>(
    pool: &SqlitePool,
    table: &str,
    id: &str,
    record: &T,
) -> Result<(), AppError> {
    let raw = serde_json::to_string(record)?;
    sqlx::query(&format!(
        "INSERT INTO {table} (id, record) VALUES (?, ?) \
         ON CONFLICT(id) DO UPDATE SET record = excluded.record"
    ))
    .bind(id)
    .bind(raw)
    .execute(pool)
    .await?;
    Ok(())
}

/// Removes the record stored under `id`. Removing an absent key is a no-op.
pub async fn remove(pool: &SqlitePool, table: &str, id: &str) -> Result<(), AppError> {
    sqlx::query(&format!("DELETE FROM {table} WHERE id = ?"))
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Returns every record in the table, ordered by key.
pub async fn values<T: DeserializeOwned>(
    pool: &SqlitePool,
    table: &str,
) -> Result<Vec<T>, AppError> {
    let rows: Vec<String> =
        sqlx::query_scalar(&format!("SELECT record FROM {table} ORDER BY id"))
            .fetch_all(pool)
            .await?;

    let mut records = Vec::with_capacity(rows.len());
    for raw in rows {
        records.push(serde_json::from_str(&raw)?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;
    use crate::models::Participant;

    #[tokio::test]
    async fn test_get_absent_key_is_none() {
        let pool = test_pool().await;
        let got: Option<Participant> = get(&pool, PARTICIPANTS, "missing").await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_in_place() {
        let pool = test_pool().await;
        let first = Participant {
            id: "p1".to_string(),
            name: "Ana".to_string(),
        };
        put(&pool, PARTICIPANTS, &first.id, &first).await.unwrap();

        let renamed = Participant {
            name: "Anabel".to_string(),
            ..first.clone()
        };
        put(&pool, PARTICIPANTS, &renamed.id, &renamed).await.unwrap();

        let all: Vec<Participant> = values(&pool, PARTICIPANTS).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Anabel");
    }

    #[tokio::test]
    async fn test_values_iterates_in_key_order() {
        let pool = test_pool().await;
        for id in ["charlie", "alpha", "bravo"] {
            let p = Participant {
                id: id.to_string(),
                name: id.to_uppercase(),
            };
            put(&pool, PARTICIPANTS, &p.id, &p).await.unwrap();
        }

        let all: Vec<Participant> = values(&pool, PARTICIPANTS).await.unwrap();
        let ids: Vec<&str> = all.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "bravo", "charlie"]);
    }

    #[tokio::test]
    async fn test_remove_absent_key_is_noop() {
        let pool = test_pool().await;
        remove(&pool, PARTICIPANTS, "missing").await.unwrap();
    }
}
