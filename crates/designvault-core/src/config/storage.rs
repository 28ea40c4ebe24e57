//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Which blob store backend holds the PNG snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BlobProvider {
    /// S3 or an S3-compatible service.
    #[default]
    S3,
    /// Local filesystem, for development and tests.
    Local,
}

/// Top-level storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to use.
    #[serde(default)]
    pub provider: BlobProvider,
    /// Prefix prepended to every object key.
    #[serde(default = "default_key_prefix")]
    pub key_prefix: String,
    /// S3 settings.
    #[serde(default)]
    pub s3: S3StorageConfig,
    /// Local filesystem settings.
    #[serde(default)]
    pub local: LocalStorageConfig,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: BlobProvider::default(),
            key_prefix: default_key_prefix(),
            s3: S3StorageConfig::default(),
            local: LocalStorageConfig::default(),
        }
    }
}

/// S3-compatible object storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3StorageConfig {
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 bucket name.
    #[serde(default)]
    pub bucket: String,
    /// Custom endpoint URL (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// Access key ID. Empty means the default AWS credential chain.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Base URL used to build public object URLs. Empty derives one from
    /// the endpoint or the bucket and region.
    #[serde(default)]
    pub public_base_url: String,
    /// Use path-style addressing (`endpoint/bucket/key`).
    #[serde(default)]
    pub force_path_style: bool,
}

impl Default for S3StorageConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            bucket: String::new(),
            endpoint: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            public_base_url: String::new(),
            force_path_style: false,
        }
    }
}

/// Local filesystem storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocalStorageConfig {
    /// Root path for stored blobs.
    #[serde(default = "default_local_root")]
    pub root_path: String,
    /// Base URL for blob references.
    #[serde(default = "default_local_base_url")]
    pub public_base_url: String,
}

impl Default for LocalStorageConfig {
    fn default() -> Self {
        Self {
            root_path: default_local_root(),
            public_base_url: default_local_base_url(),
        }
    }
}

fn default_key_prefix() -> String {
    "design-versions".to_string()
}

fn default_region() -> String {
    "ap-south-1".to_string()
}

fn default_local_root() -> String {
    "./data/blobs".to_string()
}

fn default_local_base_url() -> String {
    "local://".to_string()
}
