//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the local directory holding uploaded videos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded files are written.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// URL path prefix under which the upload directory is served.
    #[serde(default = "default_public_prefix")]
    pub public_prefix: String,
    /// Maximum request body size for uploads in bytes (0 = unlimited).
    #[serde(default)]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_prefix: default_public_prefix(),
            max_upload_size_bytes: 0,
        }
    }
}

impl StorageConfig {
    /// Build the public URL for a stored file name.
    pub fn public_url(&self, file_name: &str) -> String {
        format!("{}/{}", self.public_prefix.trim_end_matches('/'), file_name)
    }
}

fn default_upload_dir() -> String {
    "videos".to_string()
}

fn default_public_prefix() -> String {
    "/videos".to_string()
}
