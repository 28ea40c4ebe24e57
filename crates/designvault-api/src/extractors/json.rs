//! JSON body extractor that validates and reports failures as API errors.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use designvault_core::error::AppError;

use crate::error::ApiError;

/// Like [`Json`], but rejections and validation failures become
/// `VALIDATION` errors with the standard error body.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        value.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .into_values()
                .flatten()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), |m| m.to_string())
                })
                .collect::<Vec<_>>()
                .join("; ");
            AppError::validation(message)
        })?;

        Ok(Self(value))
    }
}
