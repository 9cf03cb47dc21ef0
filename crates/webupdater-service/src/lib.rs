//! # webupdater-service
//!
//! Business logic layer for WebUpdater. Each service orchestrates the
//! repositories and the blob store behind one HTTP operation.

pub mod version;
pub mod video;

pub use version::VersionService;
pub use video::VideoService;
