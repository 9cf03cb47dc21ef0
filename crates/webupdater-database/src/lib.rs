//! # webupdater-database
//!
//! SQLite connection management, embedded migrations, and concrete
//! repository implementations for the version and video catalogs.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
