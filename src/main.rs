//! WebUpdater Server: release catalog and video asset service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing_subscriber::{EnvFilter, fmt};

use webupdater_api::state::AppState;
use webupdater_core::config::AppConfig;
use webupdater_core::error::AppError;
use webupdater_database::DatabasePool;
use webupdater_database::repositories::version::VersionRepository;
use webupdater_database::repositories::video::VideoRepository;
use webupdater_service::{VersionService, VideoService};
use webupdater_storage::LocalStorageProvider;

#[tokio::main]
async fn main() {
    let env = std::env::var("WEBUPDATER_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
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
    tracing::info!("Starting WebUpdater v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Blob storage ─────────────────────────────────────
    let storage = LocalStorageProvider::new(&config.storage.upload_dir).await?;
    tracing::info!(
        upload_dir = %storage.root().display(),
        public_prefix = %config.storage.public_prefix,
        "Storage initialized"
    );

    // ── Step 2: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    webupdater_database::migration::run_migrations(db.pool()).await?;

    // ── Step 3: Repositories and services ────────────────────────
    let version_repo = Arc::new(VersionRepository::new(db.pool().clone()));
    let video_repo = Arc::new(VideoRepository::new(db.pool().clone()));

    let version_service = Arc::new(VersionService::new(version_repo));
    let video_service = Arc::new(VideoService::new(
        video_repo,
        Arc::new(storage),
        config.storage.clone(),
    ));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app_state = AppState {
        config: Arc::new(config),
        db: db.clone(),
        version_service,
        video_service,
        started_at: Instant::now(),
    };

    let app = webupdater_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("WebUpdater server listening on {}", addr);

    // ── Step 5: Graceful shutdown ────────────────────────────────
    let server = axum::serve(listener, app).with_graceful_shutdown(async {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if tokio::time::timeout(grace, db.close()).await.is_err() {
        tracing::warn!("Database pool did not close within {:?}", grace);
    }

    tracing::info!("WebUpdater server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
