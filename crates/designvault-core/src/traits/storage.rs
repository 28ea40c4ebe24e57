//! Blob store trait for the object storage that holds PNG snapshots.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for blob storage backends.
///
/// A blob is addressed by the URL returned from [`BlobStore::upload`]; that
/// URL is what gets persisted as a version's `preview_url`. Implementations
/// exist for S3 and the local filesystem in `designvault-storage`.
///
/// Implementations must not retry internally. Callers decide whether a
/// failure is fatal.
#[async_trait]
pub trait BlobStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local", "s3").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Store `data` under `key` and return the URL that references it.
    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<String>;

    /// Read back the blob referenced by `url`.
    async fn fetch(&self, url: &str) -> AppResult<Bytes>;

    /// Delete the blob referenced by `url`.
    ///
    /// Returns `Ok(())` when the blob was deleted or did not exist.
    async fn delete(&self, url: &str) -> AppResult<()>;
}
