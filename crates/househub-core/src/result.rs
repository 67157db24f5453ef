//! Convenience result type alias for HouseHub.

use crate::error::AppError;

/// A specialized `Result` type for HouseHub operations.
pub type AppResult<T> = Result<T, AppError>;
