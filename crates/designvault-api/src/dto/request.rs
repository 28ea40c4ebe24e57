//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

use designvault_service::CommitVersion;

/// Commit request body. Every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CommitRequest {
    /// Commit message.
    pub commit_message: Option<String>,
    /// Base64 PNG snapshot, optionally a data URL.
    pub png_base64: Option<String>,
    /// Author tag.
    #[validate(length(max = 255, message = "createdBy is too long"))]
    pub created_by: Option<String>,
}

impl From<CommitRequest> for CommitVersion {
    fn from(req: CommitRequest) -> Self {
        Self {
            commit_message: req.commit_message,
            png_base64: req.png_base64,
            created_by: req.created_by,
        }
    }
}

/// Revert request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RevertRequest {
    /// Version number to revert to.
    #[validate(
        required(message = "targetVersion is required"),
        range(min = 1, message = "targetVersion must be a positive version number")
    )]
    pub target_version: Option<i32>,
}

/// Query string of the compare endpoint. Parsed by the handler so that
/// missing and malformed values get the same message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompareQuery {
    pub v1: Option<String>,
    pub v2: Option<String>,
}
