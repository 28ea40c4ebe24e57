//! Route handlers.

pub mod health;
pub mod version;

use crate::error::ApiError;
use designvault_core::error::AppError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Not Found").into()
}
