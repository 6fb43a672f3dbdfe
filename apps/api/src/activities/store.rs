use sqlx::SqlitePool;
use tracing::info;
use uuid::Uuid;

use crate::clock::Clock;
use crate::errors::AppError;
use crate::kv;
use crate::models::{Activity, ActivityPayload};
use crate::participants::store::get_participant;
use crate::validation::validate_activity_payload;

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("No activity found with id {id}"))
}

/// Creates an activity with a fresh server-assigned id, an empty participant
/// list and no `updatedAt`. The payload is fully validated first; nothing is
/// persisted on failure.
pub async fn create_activity(
    pool: &SqlitePool,
    clock: &dyn Clock,
    payload: ActivityPayload,
) -> Result<Activity, AppError> {
    validate_activity_payload(&payload)?;

    let activity = Activity {
        id: Uuid::new_v4().to_string(),
        activity_type: payload.activity_type,
        description: payload.description,
        date: payload.date,
        time: payload.time,
        duration: payload.duration,
        participants: Vec::new(),
        created_at: clock.now_ns(),
        updated_at: None,
    };
    kv::put(pool, kv::ACTIVITIES, &activity.id, &activity).await?;

    info!("Created activity {}", activity.id);
    Ok(activity)
}

/// Replaces the five payload fields wholesale and refreshes `updatedAt`.
/// `id`, `createdAt` and the participant list are preserved. The format
/// checks run on create only.
pub async fn update_activity(
    pool: &SqlitePool,
    clock: &dyn Clock,
    id: &str,
    payload: ActivityPayload,
) -> Result<Activity, AppError> {
    let existing = get_activity(pool, id).await?;

    let updated = Activity {
        activity_type: payload.activity_type,
        description: payload.description,
        date: payload.date,
        time: payload.time,
        duration: payload.duration,
        updated_at: Some(clock.now_ns()),
        ..existing
    };
    kv::put(pool, kv::ACTIVITIES, id, &updated).await?;

    info!("Updated activity {id}");
    Ok(updated)
}

/// Removes the activity and returns the pre-deletion record.
pub async fn delete_activity(pool: &SqlitePool, id: &str) -> Result<Activity, AppError> {
    let activity = get_activity(pool, id).await?;
    kv::remove(pool, kv::ACTIVITIES, id).await?;

    info!("Deleted activity {id}");
    Ok(activity)
}

pub async fn get_activity(pool: &SqlitePool, id: &str) -> Result<Activity, AppError> {
    kv::get(pool, kv::ACTIVITIES, id)
        .await?
        .ok_or_else(|| not_found(id))
}

/// Returns every activity, in key order. Never fails on an empty store.
pub async fn list_activities(pool: &SqlitePool) -> Result<Vec<Activity>, AppError> {
    kv::values(pool, kv::ACTIVITIES).await
}

/// Case-insensitive substring match on `activityType`, as a linear scan over
/// all records. An empty needle matches every activity; no match is an empty
/// result, not an error.
pub async fn search_activities(
    pool: &SqlitePool,
    type_filter: &str,
) -> Result<Vec<Activity>, AppError> {
    let needle = type_filter.to_lowercase();
    let all = list_activities(pool).await?;
    Ok(all
        .into_iter()
        .filter(|a| a.activity_type.to_lowercase().contains(&needle))
        .collect())
}

/// Appends a snapshot of the participant, as of link time, to the activity.
/// Later edits to the source participant do not propagate into the embedded
/// copy. There is no de-duplication: linking the same participant twice
/// embeds two copies.
pub async fn link_participant(
    pool: &SqlitePool,
    clock: &dyn Clock,
    activity_id: &str,
    participant_id: &str,
) -> Result<Activity, AppError> {
    let mut activity = get_activity(pool, activity_id).await?;
    let participant = get_participant(pool, participant_id).await?;

    activity.participants.push(participant);
    activity.updated_at = Some(clock.now_ns());
    kv::put(pool, kv::ACTIVITIES, activity_id, &activity).await?;

    info!("Linked participant {participant_id} into activity {activity_id}");
    Ok(activity)
}

/// Removes every embedded snapshot whose id matches `participant_id`.
/// `updatedAt` is refreshed even when nothing matched, and the participant id
/// is not required to exist in the participant store.
pub async fn unlink_participant(
    pool: &SqlitePool,
    clock: &dyn Clock,
    activity_id: &str,
    participant_id: &str,
) -> Result<Activity, AppError> {
    let mut activity = get_activity(pool, activity_id).await?;

    activity.participants.retain(|p| p.id != participant_id);
    activity.updated_at = Some(clock.now_ns());
    kv::put(pool, kv::ACTIVITIES, activity_id, &activity).await?;

    info!("Unlinked participant {participant_id} from activity {activity_id}");
    Ok(activity)
}
