//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use designvault_core::config::AppConfig;
use designvault_service::VersionService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Version store
    pub version_service: Arc<VersionService>,
}

impl AppState {
    pub fn new(config: AppConfig, version_service: VersionService) -> Self {
        Self {
            config: Arc::new(config),
            version_service: Arc::new(version_service),
        }
    }
}
