//! Route definitions for the DesignVault HTTP API.
//!
//! Version routes are mounted under `/api`; the service info and liveness
//! routes sit at the root. The router receives `AppState` and passes it to
//! all handlers via Axum's `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_body = state.config.server.max_body_bytes;
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    let api_routes = Router::new()
        .merge(version_routes())
        .route("/health", get(handlers::health::health_detailed));

    Router::new()
        .route("/", get(handlers::health::service_info))
        .route("/health", get(handlers::health::liveness))
        .nest("/api", api_routes)
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Commit, history, revert, compare, delete and the PNG proxy.
///
/// `{id}` is the record id for GET and the version number for DELETE and
/// the PNG route.
fn version_routes() -> Router<AppState> {
    use handlers::version;

    Router::new()
        .route(
            "/versions",
            get(version::list_versions).post(version::commit_version),
        )
        .route("/versions/compare", get(version::compare_versions))
        .route("/versions/revert", post(version::revert_version))
        .route(
            "/versions/{id}",
            get(version::get_version).delete(version::delete_version),
        )
        .route("/versions/{id}/png", get(version::version_png))
}
