pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::activities::handlers as activity_handlers;
use crate::participants::handlers as participant_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Activity store
        .route(
            "/api/v1/activities",
            get(activity_handlers::handle_list_activities)
                .post(activity_handlers::handle_create_activity),
        )
        .route(
            "/api/v1/activities/search",
            get(activity_handlers::handle_search_activities),
        )
        .route(
            "/api/v1/activities/:id",
            get(activity_handlers::handle_get_activity)
                .put(activity_handlers::handle_update_activity)
                .delete(activity_handlers::handle_delete_activity),
        )
        .route(
            "/api/v1/activities/:id/participants/:participant_id",
            post(activity_handlers::handle_link_participant)
                .delete(activity_handlers::handle_unlink_participant),
        )
        // Participant store
        .route(
            "/api/v1/participants",
            get(participant_handlers::handle_list_participants)
                .post(participant_handlers::handle_create_participant),
        )
        .route(
            "/api/v1/participants/:id",
            get(participant_handlers::handle_get_participant)
                .put(participant_handlers::handle_update_participant)
                .delete(participant_handlers::handle_delete_participant),
        )
        .with_state(state)
}
