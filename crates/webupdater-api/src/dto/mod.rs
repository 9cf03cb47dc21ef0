//! Request and response bodies exchanged over HTTP.

pub mod request;
pub mod response;

pub use request::VersionCreate;
pub use response::{HealthResponse, VersionOut, VideoOut};
