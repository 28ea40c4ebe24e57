//! Design version handlers.

use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;

use designvault_core::error::AppError;
use designvault_entity::version::{DesignVersion, VersionDiff};
use designvault_storage::PNG_CONTENT_TYPE;

use crate::dto::request::{CommitRequest, CompareQuery, RevertRequest};
use crate::dto::response::DeleteResponse;
use crate::error::ApiError;
use crate::extractors::ValidatedJson;
use crate::extractors::path::{parse_id, parse_version_number};
use crate::state::AppState;

/// POST /api/versions
pub async fn commit_version(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CommitRequest>,
) -> Result<(StatusCode, Json<DesignVersion>), ApiError> {
    let version = state.version_service.commit(req.into()).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// GET /api/versions
pub async fn list_versions(
    State(state): State<AppState>,
) -> Result<Json<Vec<DesignVersion>>, ApiError> {
    Ok(Json(state.version_service.history().await?))
}

/// GET /api/versions/{id}
pub async fn get_version(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DesignVersion>, ApiError> {
    let id = parse_id(&id)?;
    Ok(Json(state.version_service.get_by_id(id).await?))
}

/// GET /api/versions/{versionNumber}/png
///
/// Serves the snapshot through the API so clients avoid cross-origin
/// fetches from the bucket.
pub async fn version_png(
    State(state): State<AppState>,
    Path(version_number): Path<String>,
) -> Result<Response, ApiError> {
    let version_number = parse_version_number(&version_number)?;
    let png = state.version_service.fetch_preview(version_number).await?;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, PNG_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, "public, max-age=31536000")
        .header(header::CONTENT_LENGTH, png.len())
        .body(Body::from(png))
        .map_err(|e| AppError::internal(format!("Response build failed: {e}")))?;

    Ok(response)
}

/// POST /api/versions/revert
pub async fn revert_version(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<RevertRequest>,
) -> Result<(StatusCode, Json<DesignVersion>), ApiError> {
    let target = req
        .target_version
        .ok_or_else(|| AppError::validation("targetVersion is required"))?;
    let version = state.version_service.revert(target).await?;
    Ok((StatusCode::CREATED, Json(version)))
}

/// GET /api/versions/compare?v1=&v2=
pub async fn compare_versions(
    State(state): State<AppState>,
    Query(query): Query<CompareQuery>,
) -> Result<Json<VersionDiff>, ApiError> {
    let (Some(v1), Some(v2)) = (query.v1.as_deref(), query.v2.as_deref()) else {
        return Err(AppError::validation("v1 and v2 query parameters are required").into());
    };
    let (Ok(v1), Ok(v2)) = (parse_version_number(v1), parse_version_number(v2)) else {
        return Err(AppError::validation("v1 and v2 query parameters are required").into());
    };

    Ok(Json(state.version_service.compare(v1, v2).await?))
}

/// DELETE /api/versions/{versionNumber}
pub async fn delete_version(
    State(state): State<AppState>,
    Path(version_number): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let version_number = parse_version_number(&version_number)?;
    state.version_service.delete(version_number).await?;
    Ok(Json(DeleteResponse::deleted(version_number)))
}
