use axum::{
    extract::{Path, State},
    Json,
};

use crate::errors::AppError;
use crate::models::{Participant, ParticipantPayload};
use crate::participants::store;
use crate::state::AppState;

/// POST /api/v1/participants
pub async fn handle_create_participant(
    State(state): State<AppState>,
    Json(payload): Json<ParticipantPayload>,
) -> Result<Json<Participant>, AppError> {
    let _write = state.write_lock.lock().await;
    let participant = store::create_participant(&state.db, &payload.name).await?;
    Ok(Json(participant))
}

/// PUT /api/v1/participants/:id
pub async fn handle_update_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ParticipantPayload>,
) -> Result<Json<Participant>, AppError> {
    let _write = state.write_lock.lock().await;
    let participant = store::update_participant(&state.db, &id, &payload.name).await?;
    Ok(Json(participant))
}

/// DELETE /api/v1/participants/:id
pub async fn handle_delete_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Participant>, AppError> {
    let _write = state.write_lock.lock().await;
    let participant = store::delete_participant(&state.db, &id).await?;
    Ok(Json(participant))
}

/// GET /api/v1/participants/:id
pub async fn handle_get_participant(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Participant>, AppError> {
    let participant = store::get_participant(&state.db, &id).await?;
    Ok(Json(participant))
}

/// GET /api/v1/participants
pub async fn handle_list_participants(
    State(state): State<AppState>,
) -> Result<Json<Vec<Participant>>, AppError> {
    let participants = store::list_participants(&state.db).await?;
    Ok(Json(participants))
}
