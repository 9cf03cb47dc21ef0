//! Custom Axum extractors.

pub mod json;
pub mod multipart;

pub use json::AppJson;
pub use multipart::VideoUploadForm;
