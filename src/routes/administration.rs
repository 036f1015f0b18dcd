use axum::{extract::State, Json};

use crate::models::administration::Roster;
use crate::services::administration as administration_service;
use crate::AppState;

/// GET /api/administration -- active roster grouped by category; empty on failure.
pub async fn roster(State(state): State<AppState>) -> Json<Roster> {
    Json(administration_service::roster(&state.db, state.config.roster_limit).await)
}
