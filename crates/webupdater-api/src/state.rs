//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use webupdater_core::config::AppConfig;
use webupdater_database::DatabasePool;
use webupdater_service::version::VersionService;
use webupdater_service::video::VideoService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Version service
    pub version_service: Arc<VersionService>,
    /// Video service
    pub video_service: Arc<VideoService>,
    /// Process start, for uptime reporting
    pub started_at: Instant,
}
