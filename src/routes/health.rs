//! Health check endpoints for liveness and readiness probes.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

/// Readiness probe detail.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub database: String,
}

/// Liveness probe -- always returns OK if the process is running.
pub async fn live() -> &'static str {
    "OK"
}

/// Readiness probe -- checks the datastore through the shared pool.
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let database = match state.db.acquire_pool() {
        Ok(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "connected",
            Err(e) => {
                tracing::warn!(error = %e, "Database health check failed");
                "unavailable"
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Database pool unavailable");
            "unavailable"
        }
    };

    Json(HealthStatus {
        status: "ok".to_string(),
        database: database.to_string(),
    })
}
