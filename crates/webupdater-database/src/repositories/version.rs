//! Version repository implementation.

use sqlx::SqlitePool;

use webupdater_core::error::{AppError, ErrorKind};
use webupdater_core::result::AppResult;
use webupdater_entity::version::{CreateVersion, Version};

/// Repository for published application versions.
#[derive(Debug, Clone)]
pub struct VersionRepository {
    pool: SqlitePool,
}

impl VersionRepository {
    /// Create a new version repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the most recently inserted version for a platform.
    pub async fn find_latest(&self, platform: &str) -> AppResult<Option<Version>> {
        sqlx::query_as::<_, Version>(
            "SELECT id, platform, version, file_url FROM app_versions \
             WHERE platform = ? ORDER BY id DESC LIMIT 1",
        )
        .bind(platform)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find latest version", e))
    }

    /// Insert a new version and return the stored row.
    pub async fn create(&self, data: &CreateVersion) -> AppResult<Version> {
        sqlx::query_as::<_, Version>(
            "INSERT INTO app_versions (platform, version, file_url) VALUES (?, ?, ?) \
             RETURNING id, platform, version, file_url",
        )
        .bind(&data.platform)
        .bind(&data.version)
        .bind(&data.file_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create version", e))
    }
}
