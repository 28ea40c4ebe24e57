//! Convenience result type alias for DesignVault.

use crate::error::AppError;

/// A specialized `Result` type for DesignVault operations.
pub type AppResult<T> = Result<T, AppError>;
