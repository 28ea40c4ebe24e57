//! Build the configured blob store.

use std::sync::Arc;

use tracing::info;

use designvault_core::config::{BlobProvider, StorageConfig};
#[cfg(not(feature = "s3"))]
use designvault_core::error::AppError;
use designvault_core::result::AppResult;
use designvault_core::traits::storage::BlobStore;

use crate::providers::LocalBlobStore;

/// Construct the blob store selected by `storage.provider`.
pub async fn build_blob_store(config: &StorageConfig) -> AppResult<Arc<dyn BlobStore>> {
    let store: Arc<dyn BlobStore> = match config.provider {
        BlobProvider::Local => Arc::new(
            LocalBlobStore::new(&config.local.root_path, &config.local.public_base_url).await?,
        ),
        #[cfg(feature = "s3")]
        BlobProvider::S3 => Arc::new(crate::providers::S3BlobStore::new(&config.s3).await?),
        #[cfg(not(feature = "s3"))]
        BlobProvider::S3 => {
            return Err(AppError::configuration(
                "storage.provider = \"s3\" requires the `s3` feature",
            ));
        }
    };

    info!(provider = store.provider_type(), "Blob store ready");
    Ok(store)
}
