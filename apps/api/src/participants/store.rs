use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::kv;
use crate::models::Participant;
use crate::validation::require_non_empty;

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No participant found with id {id}"))
}

/// Creates a participant with a fresh server-assigned id.
pub async fn create_participant(pool: &SqlitePool, name: &str) -> Result<Participant, AppError> {
    require_non_empty("name", name)?;

    let participant = Participant {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
    };
    kv::put(pool, kv::PARTICIPANTS, &participant.id, &participant).await?;

    info!("Created participant {}", participant.id);
    Ok(participant)
}

/// Replaces the participant's name. The id is immutable.
pub async fn update_participant(
    pool: &SqlitePool,
    id: &str,
    name: &str,
) -> Result<Participant, AppError> {
    let mut participant = get_participant(pool, id).await?;
    participant.name = name.to_string();
    kv::put(pool, kv::PARTICIPANTS, id, &participant).await?;

    info!("Updated participant {id}");
    Ok(participant)
}

/// Removes the participant and returns the pre-deletion record.
///
/// Snapshots of this participant embedded in activities are left untouched.
pub async fn delete_participant(pool: &SqlitePool, id: &str) -> Result<Participant, AppError> {
    let participant = get_participant(pool, id).await?;
    kv::remove(pool, kv::PARTICIPANTS, id).await?;

    info!("Deleted participant {id}");
    Ok(participant)
}

pub async fn get_participant(pool: &SqlitePool, id: &str) -> Result<Participant, AppError> {
    kv::get(pool, kv::PARTICIPANTS, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Returns every participant, in key order. Never fails on an empty store.
pub async fn list_participants(pool: &SqlitePool) -> Result<Vec<Participant>, AppError> {
    kv::values(pool, kv::PARTICIPANTS).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_create_assigns_fresh_ids() {
        let pool = test_pool().await;
        let a = create_participant(&pool, "Ana").await.unwrap();
        let b = create_participant(&pool, "Ana").await.unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.name, "Ana");
    }

    #[tokio::test]
    async fn test_create_rejects_empty_name() {
        let pool = test_pool().await;
        let err = create_participant(&pool, "").await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(list_participants(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_then_get_roundtrip() {
        let pool = test_pool().await;
        let created = create_participant(&pool, "Ana").await.unwrap();
        let fetched = get_participant(&pool, &created.id).await.unwrap();
        assert_eq!(created, fetched);
    }

    #[tokio::test]
    async fn test_get_update_delete_missing_id_not_found() {
        let pool = test_pool().await;
        assert!(matches!(
            get_participant(&pool, "nope").await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            update_participant(&pool, "nope", "Ana").await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            delete_participant(&pool, "nope").await.unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(list_participants(&pool).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_name_keeps_id() {
        let pool = test_pool().await;
        let created = create_participant(&pool, "Ana").await.unwrap();
        let updated = update_participant(&pool, &created.id, "Anabel")
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Anabel");
        assert_eq!(get_participant(&pool, &created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_delete_returns_record_then_get_fails() {
        let pool = test_pool().await;
        let created = create_participant(&pool, "Ana").await.unwrap();
        let deleted = delete_participant(&pool, &created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(matches!(
            get_participant(&pool, &created.id).await.unwrap_err(),
            AppError::NotFound(_)
        ));
    }

    #[tokio::test]
    async fn test_list_is_key_ordered() {
        let pool = test_pool().await;
        let mut ids = Vec::new();
        for name in ["Ana", "Bo", "Cem"] {
            ids.push(create_participant(&pool, name).await.unwrap().id);
        }
        ids.sort();

        let listed: Vec<String> = list_participants(&pool)
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(listed, ids);
    }
}
