//! Local filesystem storage provider.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use webupdater_core::error::{AppError, ErrorKind};
use webupdater_core::result::AppResult;
use webupdater_core::traits::storage::StorageProvider;

/// Local filesystem storage provider.
#[derive(Debug, Clone)]
pub struct LocalStorageProvider {
    /// Directory holding every stored file.
    root: PathBuf,
}

impl LocalStorageProvider {
    /// Create a new local storage provider rooted at the given path.
    ///
    /// The directory is created if it does not exist.
    pub async fn new(root_path: impl AsRef<Path>) -> AppResult<Self> {
        let root = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self { root })
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a file name to an absolute path inside the root.
    ///
    /// Only the final path component is used, so `..` and nested
    /// segments can never leave the root.
    fn resolve(&self, path: &str) -> AppResult<PathBuf> {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
        if name.is_empty() || name == "." || name == ".." {
            return Err(AppError::not_found(format!("File not found: {path}")));
        }
        Ok(self.root.join(name))
    }
}

#[async_trait]
impl StorageProvider for LocalStorageProvider {
    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn write(&self, path: &str, data: Bytes) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", self.root.display()),
                e,
            )
        })?;

        fs::write(&full_path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write file {path}: {e}"),
                e,
            )
        })?;

        debug!(path, bytes = data.len(), "Wrote file");
        Ok(())
    }

    async fn delete(&self, path: &str) -> AppResult<()> {
        let full_path = self.resolve(path)?;
        if fs::try_exists(&full_path).await.unwrap_or(false) {
            fs::remove_file(&full_path).await.map_err(|e| {
                AppError::with_source(ErrorKind::Storage, e.to_string(), e)
            })?;
            debug!(path, "Deleted file");
        }
        Ok(())
    }
}
