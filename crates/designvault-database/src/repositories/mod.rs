//! Version repository trait and its implementations.

pub mod memory;
pub mod version;

use async_trait::async_trait;

use designvault_core::result::AppResult;
use designvault_entity::version::{DesignVersion, NewVersion};

pub use memory::InMemoryVersionRepository;
pub use version::PgVersionRepository;

/// Persistence for design versions.
///
/// Implementations own the numbering invariants: `create_next` must assign
/// `max + 1` atomically with the insert, and `delete_and_renumber` must
/// leave the remaining numbers contiguous from 1.
#[async_trait]
pub trait VersionRepository: Send + Sync + std::fmt::Debug + 'static {
    /// The number the next commit would receive if nothing else commits first.
    async fn next_version_number(&self) -> AppResult<i32>;

    /// Insert a version with the next sequential number and return it.
    async fn create_next(&self, data: &NewVersion) -> AppResult<DesignVersion>;

    /// All versions, newest number first.
    async fn find_all_desc(&self) -> AppResult<Vec<DesignVersion>>;

    /// Find a version by its identifier.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<DesignVersion>>;

    /// Find a version by its version number.
    async fn find_by_number(&self, version_number: i32) -> AppResult<Option<DesignVersion>>;

    /// Delete the version holding `version_number`, then shift every later
    /// version down by one, lowest first. Returns the deleted row, or
    /// `None` when no version held that number.
    async fn delete_and_renumber(&self, version_number: i32) -> AppResult<Option<DesignVersion>>;

    /// Count stored versions.
    async fn count(&self) -> AppResult<u64>;

    /// Check the backing store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
