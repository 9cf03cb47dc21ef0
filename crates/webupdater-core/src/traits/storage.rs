//! Storage provider trait for the blob store holding uploaded videos.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for blob storage backends.
///
/// Paths are flat file names relative to the provider root. Reads are
/// not part of the trait: stored files are served straight from the
/// upload directory by the HTTP layer.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to a file, replacing any existing content.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file. Deleting a missing file is not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;
}
