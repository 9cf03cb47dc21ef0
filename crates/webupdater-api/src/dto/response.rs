//! Response DTOs.

use serde::{Deserialize, Serialize};

use webupdater_entity::version::Version;
use webupdater_entity::video::Video;

/// A published version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionOut {
    /// Identifier.
    pub id: i64,
    /// Target platform.
    pub platform: String,
    /// Version string.
    pub version: String,
    /// Download location.
    pub file_url: String,
}

impl From<Version> for VersionOut {
    fn from(v: Version) -> Self {
        Self {
            id: v.id,
            platform: v.platform,
            version: v.version,
            file_url: v.file_url,
        }
    }
}

/// An uploaded video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoOut {
    /// Identifier.
    pub id: i64,
    /// Logical name.
    pub name: String,
    /// Public path of the file.
    pub file_url: String,
}

impl From<Video> for VideoOut {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            name: v.name,
            file_url: v.file_url,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` when every dependency is reachable, otherwise `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"connected"` or `"unavailable"`.
    pub database: String,
    /// `"available"` or `"unavailable"`.
    pub storage: String,
    /// Seconds since the server started.
    pub uptime_seconds: u64,
}
