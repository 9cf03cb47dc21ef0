//! Video upload, bulk resolution and removal.

pub mod service;

pub use service::{UploadVideoParams, VideoService};
