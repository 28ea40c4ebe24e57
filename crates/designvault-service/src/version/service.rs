//! Version store: commit, list, revert, compare and delete design versions.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, info, warn};

use designvault_core::error::{AppError, ErrorKind};
use designvault_core::result::AppResult;
use designvault_core::traits::storage::BlobStore;
use designvault_database::VersionRepository;
use designvault_entity::version::{DEFAULT_AUTHOR, DesignVersion, NewVersion, VersionDiff};
use designvault_storage::{PNG_CONTENT_TYPE, decode_base64_png, version_object_key};

/// Input for [`VersionService::commit`].
#[derive(Debug, Clone, Default)]
pub struct CommitVersion {
    /// Commit message. Blank yields `"Version {n}"`.
    pub commit_message: Option<String>,
    /// Base64 PNG, optionally as a `data:image/png;base64,` URL.
    pub png_base64: Option<String>,
    /// Author tag. Blank yields `"designer"`.
    pub created_by: Option<String>,
}

/// Reachability of the two backing stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceHealth {
    pub database: bool,
    pub blob_store: bool,
}

impl ServiceHealth {
    pub fn is_healthy(&self) -> bool {
        self.database && self.blob_store
    }
}

/// Manages the design version history.
#[derive(Debug, Clone)]
pub struct VersionService {
    /// Version metadata.
    repo: Arc<dyn VersionRepository>,
    /// PNG snapshots.
    blobs: Arc<dyn BlobStore>,
    /// Prefix for snapshot object keys.
    key_prefix: String,
}

impl VersionService {
    /// Creates a new version service.
    pub fn new(
        repo: Arc<dyn VersionRepository>,
        blobs: Arc<dyn BlobStore>,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            repo,
            blobs,
            key_prefix: key_prefix.into(),
        }
    }

    /// Commits a new version with the next sequential number.
    ///
    /// A snapshot that cannot be decoded or uploaded is dropped with a
    /// warning; the version is still created, without a preview.
    pub async fn commit(&self, req: CommitVersion) -> AppResult<DesignVersion> {
        let preview_url = match req.png_base64.as_deref() {
            Some(payload) if !payload.trim().is_empty() => self.store_snapshot(payload).await?,
            _ => None,
        };

        let version = self
            .repo
            .create_next(&NewVersion {
                commit_message: req.commit_message,
                preview_url,
                created_by: req.created_by,
            })
            .await?;

        info!(
            version_id = version.id,
            version_number = version.version_number,
            has_preview = version.has_preview(),
            "Version committed"
        );
        Ok(version)
    }

    /// Decode and upload a snapshot, returning its URL or `None` on failure.
    ///
    /// The key embeds the number the commit is expected to receive. Another
    /// commit may take that number first; the key stays unique because of
    /// its timestamp, so the mismatch is harmless.
    async fn store_snapshot(&self, payload: &str) -> AppResult<Option<String>> {
        let png = match decode_base64_png(payload) {
            Ok(png) => png,
            Err(e) => {
                warn!(error = %e, "Discarding snapshot that is not a base64 PNG");
                return Ok(None);
            }
        };

        let expected = self.repo.next_version_number().await?;
        let key = version_object_key(&self.key_prefix, expected, Utc::now());

        match self.blobs.upload(&key, png, PNG_CONTENT_TYPE).await {
            Ok(url) => {
                debug!(key = %key, url = %url, "Snapshot uploaded");
                Ok(Some(url))
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Snapshot upload failed, committing without preview");
                Ok(None)
            }
        }
    }

    /// Lists every version, newest number first.
    pub async fn history(&self) -> AppResult<Vec<DesignVersion>> {
        self.repo.find_all_desc().await
    }

    /// Gets a version by its identifier.
    pub async fn get_by_id(&self, id: i64) -> AppResult<DesignVersion> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Version with id {id} not found")))
    }

    /// Gets a version by its number.
    pub async fn get_by_number(&self, version_number: i32) -> AppResult<DesignVersion> {
        self.repo
            .find_by_number(version_number)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Version {version_number} not found")))
    }

    /// Records a new version that points back at `target`.
    ///
    /// The target's snapshot is not copied: the new version has no preview.
    pub async fn revert(&self, target: i32) -> AppResult<DesignVersion> {
        self.get_by_number(target).await?;

        let version = self
            .repo
            .create_next(&NewVersion {
                commit_message: Some(format!("Reverted to V{target}")),
                preview_url: None,
                created_by: Some(DEFAULT_AUTHOR.to_string()),
            })
            .await?;

        info!(
            target,
            version_number = version.version_number,
            "Reverted to earlier version"
        );
        Ok(version)
    }

    /// Field-level comparison of two versions.
    pub async fn compare(&self, v1: i32, v2: i32) -> AppResult<VersionDiff> {
        let version1 = self.get_by_number(v1).await?;
        let version2 = self.get_by_number(v2).await?;
        Ok(VersionDiff::between(version1, version2))
    }

    /// Deletes a version and closes the gap in the numbering.
    ///
    /// The snapshot of the row the repository actually removed is deleted
    /// afterwards on a best-effort basis: a blob store failure is logged and
    /// the delete still succeeds.
    pub async fn delete(&self, version_number: i32) -> AppResult<bool> {
        let deleted = self
            .repo
            .delete_and_renumber(version_number)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Version {version_number} not found")))?;

        if let Some(url) = deleted.preview_url.as_deref() {
            if let Err(e) = self.blobs.delete(url).await {
                warn!(version_id = deleted.id, url = %url, error = %e, "Failed to delete snapshot");
            }
        }

        info!(
            version_id = deleted.id,
            version_number,
            "Version deleted and history renumbered"
        );
        Ok(true)
    }

    /// Reads back the PNG snapshot of a version.
    pub async fn fetch_preview(&self, version_number: i32) -> AppResult<Bytes> {
        let version = self.get_by_number(version_number).await?;
        let url = version.preview_url.ok_or_else(|| {
            AppError::not_found(format!("Version {version_number} has no preview"))
        })?;

        self.blobs.fetch(&url).await.map_err(|e| {
            warn!(version_number, url = %url, error = %e, "Snapshot fetch failed");
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to fetch preview for version {version_number}"),
                e,
            )
        })
    }

    /// Probes the repository and the blob store.
    pub async fn health(&self) -> ServiceHealth {
        let database = self.repo.health_check().await.unwrap_or_else(|e| {
            warn!(error = %e, "Database health check failed");
            false
        });
        let blob_store = self.blobs.health_check().await.unwrap_or_else(|e| {
            warn!(provider = self.blobs.provider_type(), error = %e, "Blob store health check failed");
            false
        });
        ServiceHealth {
            database,
            blob_store,
        }
    }
}
