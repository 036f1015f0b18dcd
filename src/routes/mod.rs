//! Route definitions for the heritage site API.

pub mod administration;
pub mod gallery;
pub mod health;
pub mod updates;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Request bodies are tiny filter objects.
const BODY_LIMIT_BYTES: usize = 16 * 1024;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(state.config.frontend_url.as_deref()))
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/gallery", get(gallery::list))
        .route("/royal-updates", post(updates::list))
        .route("/royal-updates/digest", get(updates::digest))
        .route("/administration", get(administration::roster));

    Router::new()
        .route("/health/live", get(health::live))
        .route("/health/ready", get(health::ready))
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(BODY_LIMIT_BYTES))
        .layer(CompressionLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn allowed_origin(frontend_url: Option<&str>) -> AllowOrigin {
    match frontend_url.map(str::parse::<HeaderValue>) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Invalid FRONTEND_URL, allowing any origin");
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    }
}
