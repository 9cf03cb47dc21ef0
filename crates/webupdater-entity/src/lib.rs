//! # webupdater-entity
//!
//! Domain entity models for WebUpdater. Every struct in this crate
//! represents a database table row or the data needed to insert one.
//! Database entities derive `sqlx::FromRow`.

pub mod version;
pub mod video;
