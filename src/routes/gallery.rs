//! Gallery routes.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::middleware::extract::QueryParams;
use crate::models::media::MediaPage;
use crate::services::gallery::{self as gallery_service, GalleryQuery};
use crate::AppState;

/// GET /api/gallery -- list media with an optional `image`/`video`/`featured` class.
pub async fn list(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<GalleryQuery>,
) -> Result<Json<MediaPage>, AppError> {
    let page = gallery_service::list(&state.db, &query).await?;
    Ok(Json(page))
}
