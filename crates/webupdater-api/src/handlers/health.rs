//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database_ok = state.db.health_check().await.unwrap_or(false);
    let storage_ok = state.video_service.storage_healthy().await;

    let status = if database_ok && storage_ok { "ok" } else { "degraded" };
    let database = if database_ok { "connected" } else { "unavailable" };
    let storage = if storage_ok { "available" } else { "unavailable" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        storage: storage.to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}
