//! Version lookup and publishing handlers.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::{VersionCreate, VersionOut};
use crate::error::ApiError;
use crate::extractors::AppJson;
use crate::state::AppState;

/// GET /version/{platform}
pub async fn get_latest_version(
    State(state): State<AppState>,
    Path(platform): Path<String>,
) -> Result<Json<VersionOut>, ApiError> {
    let version = state.version_service.latest(&platform).await?;
    Ok(Json(version.into()))
}

/// POST /version
pub async fn create_version(
    State(state): State<AppState>,
    AppJson(req): AppJson<VersionCreate>,
) -> Result<Json<VersionOut>, ApiError> {
    let version = state.version_service.publish(req.into()).await?;
    Ok(Json(version.into()))
}
