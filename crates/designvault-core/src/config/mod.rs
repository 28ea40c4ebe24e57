//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::{BlobProvider, LocalStorageConfig, S3StorageConfig, StorageConfig};

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Blob storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default`, an environment-specific overlay
    /// `config/{env}`, and environment variables prefixed with
    /// `DESIGNVAULT__` (e.g. `DESIGNVAULT__STORAGE__S3__BUCKET`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DESIGNVAULT")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let app: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        app.validate()?;
        Ok(app)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.database.url.trim().is_empty() {
            return Err(AppError::configuration("database.url is required"));
        }

        if self.storage.provider == BlobProvider::S3 && self.storage.s3.bucket.trim().is_empty() {
            return Err(AppError::configuration(
                "storage.s3.bucket is required when storage.provider = \"s3\"",
            ));
        }

        if self.server.max_body_bytes == 0 {
            return Err(AppError::configuration(
                "server.max_body_bytes must be greater than zero",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> AppConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("build")
            .try_deserialize()
            .expect("deserialize")
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let cfg = parse(
            r#"
            [database]
            url = "postgres://localhost/designvault"
            [storage]
            provider = "local"
            "#,
        );

        assert_eq!(cfg.server.port, 3001);
        assert_eq!(cfg.server.max_body_bytes, 50 * 1024 * 1024);
        assert_eq!(cfg.storage.key_prefix, "design-versions");
        assert_eq!(cfg.storage.s3.region, "ap-south-1");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.database.run_migrations);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_s3_without_bucket_is_rejected() {
        let cfg = parse(
            r#"
            [database]
            url = "postgres://localhost/designvault"
            [storage]
            provider = "s3"
            "#,
        );

        let err = cfg.validate().expect_err("bucket missing");
        assert_eq!(err.kind, crate::error::ErrorKind::Configuration);
    }

    #[test]
    fn test_empty_database_url_is_rejected() {
        let cfg = parse(
            r#"
            [database]
            url = ""
            [storage]
            provider = "local"
            "#,
        );

        assert!(cfg.validate().is_err());
    }
}
