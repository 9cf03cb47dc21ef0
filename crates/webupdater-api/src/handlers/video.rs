//! Video upload, lookup, and removal handlers.

use axum::Json;
use axum::extract::{Path, State};

use webupdater_service::video::UploadVideoParams;

use crate::dto::VideoOut;
use crate::error::ApiError;
use crate::extractors::{AppJson, VideoUploadForm};
use crate::state::AppState;

/// POST /videos/upload: multipart `name` + `file`
pub async fn upload_video(
    State(state): State<AppState>,
    form: VideoUploadForm,
) -> Result<Json<VideoOut>, ApiError> {
    let video = state
        .video_service
        .upload(UploadVideoParams {
            name: form.name,
            file_name: form.file_name,
            data: form.data,
        })
        .await?;

    Ok(Json(video.into()))
}

/// POST /videos/find: body is a JSON array of names
pub async fn find_videos(
    State(state): State<AppState>,
    AppJson(names): AppJson<Vec<String>>,
) -> Result<Json<Vec<VideoOut>>, ApiError> {
    let videos = state.video_service.resolve(&names).await?;
    Ok(Json(videos.into_iter().map(VideoOut::from).collect()))
}

/// DELETE /videos/remove/{video_name}
pub async fn remove_video(
    State(state): State<AppState>,
    Path(video_name): Path<String>,
) -> Result<Json<VideoOut>, ApiError> {
    let video = state.video_service.remove(&video_name).await?;
    Ok(Json(video.into()))
}
