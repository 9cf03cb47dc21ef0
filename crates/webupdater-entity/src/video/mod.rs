//! Uploaded video assets.

pub mod model;

pub use model::{CreateVideo, Video};
