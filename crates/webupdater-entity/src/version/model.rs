//! Version entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One published build of the application for one platform.
///
/// Rows are never updated. The latest version of a platform is the row
/// with the greatest `id`, regardless of the `version` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Version {
    /// Identifier assigned by storage, strictly increasing.
    pub id: i64,
    /// Target platform, e.g. `"windows"` or `"mac"`.
    pub platform: String,
    /// Free-form version string.
    pub version: String,
    /// Download location of the build.
    pub file_url: String,
}

/// Data required to insert a new version row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateVersion {
    /// Target platform.
    pub platform: String,
    /// Free-form version string.
    pub version: String,
    /// Download location of the build.
    pub file_url: String,
}
