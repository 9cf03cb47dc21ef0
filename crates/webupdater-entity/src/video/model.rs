//! Video entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An uploaded video, unique by logical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Video {
    /// Identifier assigned by storage.
    pub id: i64,
    /// Logical name chosen by the uploader.
    pub name: String,
    /// Public path of the backing blob, e.g. `/videos/<token>.mp4`.
    pub file_url: String,
}

impl Video {
    /// The on-disk file name of the backing blob.
    ///
    /// This is the last path segment of `file_url`.
    pub fn storage_file_name(&self) -> &str {
        self.file_url
            .rsplit('/')
            .next()
            .unwrap_or(self.file_url.as_str())
    }
}

/// Data required to insert a new video row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVideo {
    /// Logical name.
    pub name: String,
    /// Public path of the backing blob.
    pub file_url: String,
}
