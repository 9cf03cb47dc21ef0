//! Video repository implementation.

use sqlx::SqlitePool;

use webupdater_core::error::{AppError, ErrorKind};
use webupdater_core::result::AppResult;
use webupdater_entity::video::{CreateVideo, Video};

/// Repository for uploaded video records.
#[derive(Debug, Clone)]
pub struct VideoRepository {
    pool: SqlitePool,
}

impl VideoRepository {
    /// Create a new video repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new video.
    ///
    /// A name that already exists fails at the unique index and is
    /// reported as a [`ErrorKind::Conflict`].
    pub async fn create(&self, data: &CreateVideo) -> AppResult<Video> {
        sqlx::query_as::<_, Video>(
            "INSERT INTO videos (name, file_url) VALUES (?, ?) RETURNING id, name, file_url",
        )
        .bind(&data.name)
        .bind(&data.file_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            let duplicate =
                matches!(&e, sqlx::Error::Database(db) if db.is_unique_violation());
            if duplicate {
                AppError::with_source(
                    ErrorKind::Conflict,
                    format!("Video '{}' already exists", data.name),
                    e,
                )
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create video", e)
            }
        })
    }

    /// Find a video by exact name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Video>> {
        sqlx::query_as::<_, Video>("SELECT id, name, file_url FROM videos WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find video", e))
    }

    /// Find every video whose name is in `names`. Unknown names are skipped.
    ///
    /// The names travel as a single JSON array parameter, so the list
    /// length is not bounded by SQLite's host-parameter limit.
    pub async fn find_by_names(&self, names: &[String]) -> AppResult<Vec<Video>> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let encoded = serde_json::to_string(names).map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to encode video names", e)
        })?;

        sqlx::query_as::<_, Video>(
            "SELECT id, name, file_url FROM videos \
             WHERE name IN (SELECT value FROM json_each(?))",
        )
        .bind(encoded)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find videos", e))
    }

    /// Delete a video row. Returns `false` if it was already gone.
    pub async fn delete(&self, video: &Video) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(video.id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete video", e))?;
        Ok(result.rows_affected() > 0)
    }
}
