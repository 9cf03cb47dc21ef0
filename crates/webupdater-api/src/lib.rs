//! # webupdater-api
//!
//! HTTP API layer for WebUpdater built on Axum.
//!
//! Provides the version and video endpoints, static serving of uploaded
//! files, request logging and CORS middleware, extractors, DTOs, and
//! error mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
