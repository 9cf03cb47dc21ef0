//! Version publishing and lookup.

pub mod service;

pub use service::VersionService;
