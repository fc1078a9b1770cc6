//! Convenience result type alias for the Storynest admin console.

use crate::error::AppError;

/// A specialized `Result` type for Storynest operations.
///
/// This is defined as a convenience so that every crate does not need to
/// write `Result<T, AppError>` explicitly.
pub type AppResult<T> = Result<T, AppError>;
