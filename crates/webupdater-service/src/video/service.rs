//! Video service: upload, bulk lookup and removal.

use std::collections::BTreeSet;
use std::sync::Arc;

use bytes::Bytes;
use tracing::{info, warn};

use webupdater_core::config::StorageConfig;
use webupdater_core::error::{AppError, ErrorKind};
use webupdater_core::traits::storage::StorageProvider;
use webupdater_database::repositories::video::VideoRepository;
use webupdater_entity::video::{CreateVideo, Video};
use webupdater_storage::generate_storage_name;

/// Parameters of a single multipart upload.
#[derive(Debug, Clone)]
pub struct UploadVideoParams {
    /// Logical name, unique across all videos.
    pub name: String,
    /// File name sent by the client; only its extension is kept.
    pub file_name: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Keeps video records and their blobs in step.
#[derive(Debug, Clone)]
pub struct VideoService {
    video_repo: Arc<VideoRepository>,
    storage: Arc<dyn StorageProvider>,
    config: StorageConfig,
}

impl VideoService {
    /// Creates a new video service.
    pub fn new(
        video_repo: Arc<VideoRepository>,
        storage: Arc<dyn StorageProvider>,
        config: StorageConfig,
    ) -> Self {
        Self {
            video_repo,
            storage,
            config,
        }
    }

    /// Store an uploaded file under a generated name and record it.
    ///
    /// If the record cannot be created (e.g. the name is taken) the blob
    /// just written is removed again before the error is returned.
    pub async fn upload(&self, params: UploadVideoParams) -> Result<Video, AppError> {
        let storage_name = generate_storage_name(params.file_name.as_deref());
        let size = params.data.len();

        self.storage.write(&storage_name, params.data).await?;

        let create = CreateVideo {
            name: params.name,
            file_url: self.config.public_url(&storage_name),
        };

        match self.video_repo.create(&create).await {
            Ok(video) => {
                info!(
                    id = video.id,
                    name = %video.name,
                    file_url = %video.file_url,
                    bytes = size,
                    "Uploaded video"
                );
                Ok(video)
            }
            Err(err) => {
                if let Err(cleanup) = self.storage.delete(&storage_name).await {
                    warn!(
                        file = %storage_name,
                        error = %cleanup,
                        "Failed to remove blob of rejected upload"
                    );
                }
                Err(err)
            }
        }
    }

    /// Resolve every requested name, or fail listing the ones missing.
    ///
    /// Results come back in storage order, not request order.
    pub async fn resolve(&self, names: &[String]) -> Result<Vec<Video>, AppError> {
        let found = self.video_repo.find_by_names(names).await?;

        if found.len() != names.len() {
            let found_names: BTreeSet<&str> = found.iter().map(|v| v.name.as_str()).collect();
            let missing: Vec<&str> = names
                .iter()
                .map(String::as_str)
                .filter(|name| !found_names.contains(name))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect();

            return Err(AppError::not_found(format!("Missing: {missing:?}"))
                .with_details(serde_json::json!({ "missing": missing })));
        }

        Ok(found)
    }

    /// Delete a video's blob, then its record.
    ///
    /// The record is kept when the blob cannot be deleted. A blob that is
    /// already gone is not an error. A record removed by a concurrent
    /// call in the meantime is reported as not found.
    pub async fn remove(&self, name: &str) -> Result<Video, AppError> {
        let video = self
            .video_repo
            .find_by_name(name)
            .await?
            .ok_or_else(|| AppError::not_found("Video not found"))?;

        match self.storage.delete(video.storage_file_name()).await {
            Ok(()) => {}
            Err(e) if e.kind == ErrorKind::NotFound => {}
            Err(e) => {
                return Err(AppError::internal(format!(
                    "Error deleting file: {}",
                    e.message
                )));
            }
        }

        if !self.video_repo.delete(&video).await? {
            return Err(AppError::not_found("Video not found"));
        }
        info!(id = video.id, name = %video.name, "Removed video");
        Ok(video)
    }

    /// Whether the blob store is reachable.
    pub async fn storage_healthy(&self) -> bool {
        self.storage.health_check().await.unwrap_or(false)
    }
}
