//! In-memory version repository.
//!
//! Holds every row behind one async mutex, so number assignment and
//! renumbering are trivially atomic. Used by tests and local runs that do
//! not need PostgreSQL.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use designvault_core::result::AppResult;
use designvault_entity::version::{DesignVersion, NewVersion};

use super::VersionRepository;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: i64,
    /// Sorted ascending by `version_number`.
    rows: Vec<DesignVersion>,
}

impl MemoryState {
    fn next_number(&self) -> i32 {
        self.rows.last().map_or(1, |v| v.version_number + 1)
    }
}

/// Version repository backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryVersionRepository {
    state: Mutex<MemoryState>,
}

impl InMemoryVersionRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VersionRepository for InMemoryVersionRepository {
    async fn next_version_number(&self) -> AppResult<i32> {
        Ok(self.state.lock().await.next_number())
    }

    async fn create_next(&self, data: &NewVersion) -> AppResult<DesignVersion> {
        let mut state = self.state.lock().await;
        let next = state.next_number();
        state.last_id += 1;

        let version = DesignVersion {
            id: state.last_id,
            version_number: next,
            commit_message: data.resolved_message(next),
            preview_url: data.preview_url.clone(),
            created_by: data.resolved_author(),
            created_at: Utc::now(),
        };
        state.rows.push(version.clone());
        Ok(version)
    }

    async fn find_all_desc(&self) -> AppResult<Vec<DesignVersion>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().rev().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<DesignVersion>> {
        let state = self.state.lock().await;
        Ok(state.rows.iter().find(|v| v.id == id).cloned())
    }

    async fn find_by_number(&self, version_number: i32) -> AppResult<Option<DesignVersion>> {
        let state = self.state.lock().await;
        Ok(state
            .rows
            .iter()
            .find(|v| v.version_number == version_number)
            .cloned())
    }

    async fn delete_and_renumber(&self, version_number: i32) -> AppResult<Option<DesignVersion>> {
        let mut state = self.state.lock().await;
        let Some(pos) = state
            .rows
            .iter()
            .position(|v| v.version_number == version_number)
        else {
            return Ok(None);
        };

        let deleted = state.rows.remove(pos);
        for later in state.rows.iter_mut().skip(pos) {
            later.version_number -= 1;
        }
        Ok(Some(deleted))
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.state.lock().await.rows.len() as u64)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
