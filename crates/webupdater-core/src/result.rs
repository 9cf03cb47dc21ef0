//! Convenience result type alias for WebUpdater.

use crate::error::AppError;

/// A specialized `Result` type for WebUpdater operations.
pub type AppResult<T> = Result<T, AppError>;
