//! Published application versions.

pub mod model;

pub use model::{CreateVersion, Version};
