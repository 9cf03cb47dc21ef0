//! Request DTOs.

use serde::{Deserialize, Serialize};

use webupdater_entity::version::CreateVersion;

/// Body of `POST /version`.
///
/// Only types are checked; empty strings are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionCreate {
    /// Target platform.
    pub platform: String,
    /// Version string.
    pub version: String,
    /// Download location.
    pub file_url: String,
}

impl From<VersionCreate> for CreateVersion {
    fn from(req: VersionCreate) -> Self {
        Self {
            platform: req.platform,
            version: req.version,
            file_url: req.file_url,
        }
    }
}
