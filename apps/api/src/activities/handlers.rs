use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::activities::store;
use crate::errors::AppError;
use crate::models::{Activity, ActivityPayload};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SearchQuery {
    /// Substring matched against `activityType`. Absent means match all.
    #[serde(rename = "type", default)]
    pub type_filter: String,
}

/// POST /api/v1/activities
pub async fn handle_create_activity(
    State(state): State<AppState>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>, AppError> {
    let _write = state.write_lock.lock().await;
    let activity = store::create_activity(&state.db, state.clock.as_ref(), payload).await?;
    Ok(Json(activity))
}

/// PUT /api/v1/activities/:id
pub async fn handle_update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ActivityPayload>,
) -> Result<Json<Activity>, AppError> {
    let _write = state.write_lock.lock().await;
    let activity = store::update_activity(&state.db, state.clock.as_ref(), &id, payload).await?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/:id
pub async fn handle_delete_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Activity>, AppError> {
    let _write = state.write_lock.lock().await;
    let activity = store::delete_activity(&state.db, &id).await?;
    Ok(Json(activity))
}

/// GET /api/v1/activities/:id
pub async fn handle_get_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Activity>, AppError> {
    let activity = store::get_activity(&state.db, &id).await?;
    Ok(Json(activity))
}

/// GET /api/v1/activities
pub async fn handle_list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let activities = store::list_activities(&state.db).await?;
    Ok(Json(activities))
}

/// GET /api/v1/activities/search?type=
pub async fn handle_search_activities(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Vec<Activity>>, AppError> {
    let activities = store::search_activities(&state.db, &params.type_filter).await?;
    Ok(Json(activities))
}

/// POST /api/v1/activities/:id/participants/:participant_id
pub async fn handle_link_participant(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(String, String)>,
) -> Result<Json<Activity>, AppError> {
    let _write = state.write_lock.lock().await;
    let activity =
        store::link_participant(&state.db, state.clock.as_ref(), &id, &participant_id).await?;
    Ok(Json(activity))
}

/// DELETE /api/v1/activities/:id/participants/:participant_id
pub async fn handle_unlink_participant(
    State(state): State<AppState>,
    Path((id, participant_id)): Path<(String, String)>,
) -> Result<Json<Activity>, AppError> {
    let _write = state.write_lock.lock().await;
    let activity =
        store::unlink_participant(&state.db, state.clock.as_ref(), &id, &participant_id).await?;
    Ok(Json(activity))
}
