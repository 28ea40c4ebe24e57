//! S3-compatible blob store (requires the `s3` feature).

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info, warn};

use designvault_core::config::S3StorageConfig;
use designvault_core::error::{AppError, ErrorKind};
use designvault_core::result::AppResult;
use designvault_core::traits::storage::BlobStore;

use super::{join_url, key_from_url};

/// S3-compatible blob store.
#[derive(Debug, Clone)]
pub struct S3BlobStore {
    client: Client,
    bucket: String,
    /// Prefix of every URL this store hands out.
    base_url: String,
}

impl S3BlobStore {
    /// Build a client from configuration.
    ///
    /// Static credentials are used when `access_key` is set, otherwise the
    /// default AWS credential chain. SDK retries are disabled.
    pub async fn new(config: &S3StorageConfig) -> AppResult<Self> {
        if config.bucket.trim().is_empty() {
            return Err(AppError::configuration("S3 bucket name is empty"));
        }

        info!(
            region = %config.region,
            bucket = %config.bucket,
            endpoint = %config.endpoint,
            "Initializing S3 blob store"
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());

        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "designvault-config",
            ));
        }
        if !config.endpoint.is_empty() {
            loader = loader.endpoint_url(config.endpoint.clone());
        }

        let shared = loader.load().await;
        let s3_config = aws_sdk_s3::config::Builder::from(&shared)
            .force_path_style(config.force_path_style)
            .build();

        Ok(Self {
            client: Client::from_conf(s3_config),
            bucket: config.bucket.clone(),
            base_url: public_base_url(config),
        })
    }

    fn key_for(&self, url: &str) -> AppResult<String> {
        key_from_url(&self.base_url, url)
            .map(String::from)
            .ok_or_else(|| AppError::validation(format!("URL is not in bucket {}: {url}", self.bucket)))
    }
}

/// Base of the URLs handed out for objects in this bucket.
fn public_base_url(config: &S3StorageConfig) -> String {
    if !config.public_base_url.is_empty() {
        config.public_base_url.trim_end_matches('/').to_string()
    } else if !config.endpoint.is_empty() {
        format!("{}/{}", config.endpoint.trim_end_matches('/'), config.bucket)
    } else {
        format!(
            "https://{}.s3.{}.amazonaws.com",
            config.bucket, config.region
        )
    }
}

#[async_trait]
impl BlobStore for S3BlobStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn health_check(&self) -> AppResult<bool> {
        match self.client.head_bucket().bucket(&self.bucket).send().await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(bucket = %self.bucket, error = %DisplayErrorContext(&e), "S3 health check failed");
                Ok(false)
            }
        }
    }

    async fn upload(&self, key: &str, data: Bytes, content_type: &str) -> AppResult<String> {
        let size = data.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("S3 upload of {key} failed: {}", DisplayErrorContext(&e)),
                    e,
                )
            })?;

        debug!(key, bytes = size, "Uploaded object to S3");
        Ok(join_url(&self.base_url, key))
    }

    async fn fetch(&self, url: &str) -> AppResult<Bytes> {
        let key = self.key_for(url)?;
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|s| s.is_no_such_key()) {
                    AppError::not_found(format!("Object not found: {key}"))
                } else {
                    AppError::with_source(
                        ErrorKind::ExternalService,
                        format!("S3 fetch of {key} failed: {}", DisplayErrorContext(&e)),
                        e,
                    )
                }
            })?;

        let body = output.body.collect().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Failed to read S3 object body: {key}"),
                e,
            )
        })?;
        Ok(body.into_bytes())
    }

    async fn delete(&self, url: &str) -> AppResult<()> {
        let key = self.key_for(url)?;
        // S3 answers 204 for missing keys too.
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(&key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("S3 delete of {key} failed: {}", DisplayErrorContext(&e)),
                    e,
                )
            })?;

        debug!(key, "Deleted object from S3");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> S3StorageConfig {
        S3StorageConfig {
            bucket: "designs".into(),
            ..S3StorageConfig::default()
        }
    }

    #[test]
    fn test_virtual_hosted_url_by_default() {
        assert_eq!(
            public_base_url(&config()),
            "https://designs.s3.ap-south-1.amazonaws.com"
        );
    }

    #[test]
    fn test_endpoint_uses_path_style_url() {
        let cfg = S3StorageConfig {
            endpoint: "http://localhost:9000/".into(),
            ..config()
        };
        assert_eq!(public_base_url(&cfg), "http://localhost:9000/designs");
    }

    #[test]
    fn test_explicit_public_base_wins() {
        let cfg = S3StorageConfig {
            endpoint: "http://localhost:9000".into(),
            public_base_url: "https://cdn.example.com/".into(),
            ..config()
        };
        assert_eq!(public_base_url(&cfg), "https://cdn.example.com");
    }

    #[tokio::test]
    async fn test_empty_bucket_is_a_configuration_error() {
        let err = S3BlobStore::new(&S3StorageConfig::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }
}
