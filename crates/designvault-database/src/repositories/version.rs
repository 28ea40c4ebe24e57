//! PostgreSQL version repository.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;

use designvault_core::error::{AppError, ErrorKind};
use designvault_core::result::AppResult;
use designvault_entity::version::{DesignVersion, NewVersion};

use super::VersionRepository;

const VERSION_NUMBER_KEY: &str = "design_versions_version_number_key";

/// Serializes writers against each other while still allowing reads.
const LOCK_VERSIONS: &str = "LOCK TABLE design_versions IN SHARE ROW EXCLUSIVE MODE";

/// Repository for the `design_versions` table.
#[derive(Debug, Clone)]
pub struct PgVersionRepository {
    pool: PgPool,
}

impl PgVersionRepository {
    /// Create a new version repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn map_write_error(e: sqlx::Error, context: &'static str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.constraint() == Some(VERSION_NUMBER_KEY) => {
            AppError::conflict("Version number already taken by a concurrent commit")
        }
        _ => AppError::with_source(ErrorKind::Database, context, e),
    }
}

#[async_trait]
impl VersionRepository for PgVersionRepository {
    async fn next_version_number(&self) -> AppResult<i32> {
        sqlx::query_scalar::<_, i32>(
            "SELECT COALESCE(MAX(version_number), 0) + 1 FROM design_versions",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read latest version", e)
        })
    }

    async fn create_next(&self, data: &NewVersion) -> AppResult<DesignVersion> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(LOCK_VERSIONS)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock versions", e))?;

        let next: i32 = sqlx::query_scalar(
            "SELECT COALESCE(MAX(version_number), 0) + 1 FROM design_versions",
        )
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to read latest version", e)
        })?;

        let version = sqlx::query_as::<_, DesignVersion>(
            "INSERT INTO design_versions (version_number, commit_message, preview_url, created_by) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(next)
        .bind(data.resolved_message(next))
        .bind(&data.preview_url)
        .bind(data.resolved_author())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, "Failed to create version"))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit version", e)
        })?;

        Ok(version)
    }

    async fn find_all_desc(&self) -> AppResult<Vec<DesignVersion>> {
        sqlx::query_as::<_, DesignVersion>(
            "SELECT * FROM design_versions ORDER BY version_number DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list versions", e))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<DesignVersion>> {
        sqlx::query_as::<_, DesignVersion>("SELECT * FROM design_versions WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find version", e))
    }

    async fn find_by_number(&self, version_number: i32) -> AppResult<Option<DesignVersion>> {
        sqlx::query_as::<_, DesignVersion>(
            "SELECT * FROM design_versions WHERE version_number = $1",
        )
        .bind(version_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find version by number", e)
        })
    }

    async fn delete_and_renumber(&self, version_number: i32) -> AppResult<Option<DesignVersion>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query(LOCK_VERSIONS)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock versions", e))?;

        let deleted = sqlx::query_as::<_, DesignVersion>(
            "DELETE FROM design_versions WHERE version_number = $1 RETURNING *",
        )
        .bind(version_number)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete version", e))?;

        let Some(deleted) = deleted else {
            // Dropping the transaction rolls it back.
            return Ok(None);
        };

        let later: Vec<(i64, i32)> = sqlx::query_as(
            "SELECT id, version_number FROM design_versions \
             WHERE version_number > $1 ORDER BY version_number ASC",
        )
        .bind(version_number)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list later versions", e)
        })?;

        // Ascending order: each target number was freed by the previous step.
        for (id, current) in &later {
            sqlx::query("UPDATE design_versions SET version_number = $2 WHERE id = $1")
                .bind(id)
                .bind(current - 1)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_write_error(e, "Failed to renumber version"))?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit delete", e)
        })?;

        debug!(
            version_number,
            renumbered = later.len(),
            "Deleted version and renumbered successors"
        );
        Ok(Some(deleted))
    }

    async fn count(&self) -> AppResult<u64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM design_versions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count versions", e)
            })?;
        Ok(total as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
