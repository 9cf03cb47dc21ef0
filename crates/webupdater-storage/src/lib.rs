//! # webupdater-storage
//!
//! Blob storage for uploaded videos. Files live flat in a single local
//! directory and are addressed by server-generated names.

pub mod naming;
pub mod providers;

pub use naming::generate_storage_name;
pub use providers::local::LocalStorageProvider;
