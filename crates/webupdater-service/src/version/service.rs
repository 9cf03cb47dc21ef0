//! Version service.

use std::sync::Arc;

use tracing::info;

use webupdater_core::error::AppError;
use webupdater_database::repositories::version::VersionRepository;
use webupdater_entity::version::{CreateVersion, Version};

/// Publishes versions and answers "latest version for a platform".
#[derive(Debug, Clone)]
pub struct VersionService {
    version_repo: Arc<VersionRepository>,
}

impl VersionService {
    /// Creates a new version service.
    pub fn new(version_repo: Arc<VersionRepository>) -> Self {
        Self { version_repo }
    }

    /// The most recently published version for `platform`.
    pub async fn latest(&self, platform: &str) -> Result<Version, AppError> {
        self.version_repo
            .find_latest(platform)
            .await?
            .ok_or_else(|| AppError::not_found("Version not found"))
    }

    /// Publish a new version. Duplicates are allowed.
    pub async fn publish(&self, data: CreateVersion) -> Result<Version, AppError> {
        let version = self.version_repo.create(&data).await?;
        info!(
            id = version.id,
            platform = %version.platform,
            version = %version.version,
            "Published version"
        );
        Ok(version)
    }
}
