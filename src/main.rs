//! DesignVault Server: version history for design snapshots.
//!
//! Main entry point that wires all crates together and starts the server.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinError;
use tracing_subscriber::{EnvFilter, fmt};

use designvault_api::{AppState, build_router};
use designvault_core::config::AppConfig;
use designvault_core::error::AppError;
use designvault_database::{DatabasePool, PgVersionRepository};
use designvault_service::VersionService;
use designvault_storage::build_blob_store;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load `config/default.toml`, the `DESIGNVAULT_ENV` overlay and
/// `DESIGNVAULT__*` environment variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("DESIGNVAULT_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting DesignVault v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::open(&config.database).await?;

    // ── Step 2: Blob store ───────────────────────────────────────
    let blobs = build_blob_store(&config.storage).await?;

    // ── Step 3: Version store ────────────────────────────────────
    let repo = Arc::new(PgVersionRepository::new(db.pool().clone()));
    let version_service = VersionService::new(repo, blobs, config.storage.key_prefix.clone());

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let app = build_router(AppState::new(config, version_service));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("DesignVault server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });
    let mut server = tokio::spawn(server.into_future());

    let outcome = tokio::select! {
        res = &mut server => server_outcome(res),
        _ = shutdown_rx.changed() => match tokio::time::timeout(grace, &mut server).await {
            Ok(res) => server_outcome(res),
            Err(_) => {
                tracing::warn!(grace_seconds = grace.as_secs(), "Connections still open after grace period, aborting");
                server.abort();
                Ok(())
            }
        },
    };

    // ── Step 6: Release the pool ─────────────────────────────────
    db.close().await;

    tracing::info!("DesignVault server shut down gracefully");
    outcome
}

fn server_outcome(res: Result<std::io::Result<()>, JoinError>) -> Result<(), AppError> {
    match res {
        Ok(Ok(())) => Ok(()),
        Ok(Err(e)) => Err(AppError::internal(format!("Server error: {e}"))),
        Err(e) => Err(AppError::internal(format!("Server task failed: {e}"))),
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
