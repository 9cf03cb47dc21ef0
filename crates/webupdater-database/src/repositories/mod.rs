//! Repository implementations for the WebUpdater tables.

pub mod version;
pub mod video;

pub use version::VersionRepository;
pub use video::VideoRepository;
