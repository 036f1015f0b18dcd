//! Royal updates routes: paginated feed and homepage digest.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::extract::JsonBody;
use crate::models::update::{ListUpdatesRequest, RoyalDigest, UpdatesPage};
use crate::services::updates as updates_service;
use crate::AppState;

/// POST /api/royal-updates -- list active updates filtered by category.
/// A body-less request lists every category with default paging.
pub async fn list(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ListUpdatesRequest>,
) -> Result<Json<UpdatesPage>, AppError> {
    let page = updates_service::list(&state.db, state.clock.as_ref(), &body).await?;
    Ok(Json(page))
}

/// GET /api/royal-updates/digest -- latest decrees and news; empty on failure.
pub async fn digest(State(state): State<AppState>) -> Json<RoyalDigest> {
    Json(updates_service::digest(&state.db, state.clock.as_ref()).await)
}
