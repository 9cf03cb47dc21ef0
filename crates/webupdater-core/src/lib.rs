//! # webupdater-core
//!
//! Core crate for WebUpdater. Contains configuration schemas, the blob
//! storage trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other WebUpdater crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
