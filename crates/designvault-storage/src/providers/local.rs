//! Local filesystem blob store.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use designvault_core::error::{AppError, ErrorKind};
use designvault_core::result::AppResult;
use designvault_core::traits::storage::BlobStore;

use super::{join_url, key_from_url};

/// Blob store that writes snapshots under a root directory.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    /// Root directory for all stored blobs.
    root: PathBuf,
    /// Prefix of every URL this store hands out.
    base_url: String,
}

impl LocalBlobStore {
    /// Create a local blob store rooted at the given path.
    pub async fn new(root_path: &str, base_url: &str) -> AppResult<Self> {
        let root = PathBuf::from(root_path);
        fs::create_dir_all(&root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create blob root: {}", root.display()),
                e,
            )
        })?;
        Ok(Self {
            root,
            base_url: base_url.to_string(),
        })
    }

    /// Map a key to a path inside the root, refusing anything that could
    /// escape it.
    fn resolve_key(&self, key: &str) -> AppResult<PathBuf> {
        let relative = Path::new(key.trim_start_matches('/'));
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || key.trim_start_matches('/').is_empty() {
            return Err(AppError::validation(format!("Invalid blob key: {key}")));
        }
        Ok(self.root.join(relative))
    }

    fn resolve_url(&self, url: &str) -> AppResult<PathBuf> {
        let key = key_from_url(&self.base_url, url)
            .ok_or_else(|| AppError::validation(format!("URL is not a local blob: {url}")))?;
        self.resolve_key(key)
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    fn provider_type(&self) -> &str {
        "local"
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(fs::metadata(&self.root)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false))
    }

    async fn upload(&self, key: &str, data: Bytes, _content_type: &str) -> AppResult<String> {
        let path = self.resolve_key(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to create directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write blob: {key}"), e)
        })?;

        debug!(key, bytes = data.len(), "Wrote blob");
        Ok(join_url(&self.base_url, key))
    }

    async fn fetch(&self, url: &str) -> AppResult<Bytes> {
        let path = self.resolve_url(url)?;
        let data = fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {url}"))
            } else {
                AppError::with_source(ErrorKind::Storage, format!("Failed to read blob: {url}"), e)
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        let path = self.resolve_url(url)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                debug!(url, "Deleted blob");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to delete blob: {url}"),
                e,
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store(dir: &tempfile::TempDir) -> LocalBlobStore {
        LocalBlobStore::new(dir.path().to_str().unwrap(), "local://")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_upload_fetch_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        let data = Bytes::from_static(b"\x89PNG\r\n\x1a\nrest");
        let url = store
            .upload("design-versions/v1-1.png", data.clone(), "image/png")
            .await
            .unwrap();
        assert_eq!(url, "local://design-versions/v1-1.png");
        assert!(dir.path().join("design-versions/v1-1.png").exists());

        assert_eq!(store.fetch(&url).await.unwrap(), data);

        store.delete(&url).await.unwrap();
        assert!(store.fetch(&url).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        store.delete("local://design-versions/gone.png").await.unwrap();
    }

    #[tokio::test]
    async fn test_rejects_escaping_keys_and_foreign_urls() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;

        assert!(
            store
                .upload("../outside.png", Bytes::from_static(b"x"), "image/png")
                .await
                .is_err()
        );
        assert!(store.fetch("https://elsewhere.example/a.png").await.is_err());
        assert!(store.delete("local://../../etc/passwd").await.is_err());
    }

    #[tokio::test]
    async fn test_health_check() {
        let dir = tempfile::tempdir().unwrap();
        let store = store(&dir).await;
        assert!(store.health_check().await.unwrap());
    }
}
