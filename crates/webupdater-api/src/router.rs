//! Route definitions for the WebUpdater HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use webupdater_core::config::StorageConfig;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = match state.config.storage.max_upload_size_bytes {
        0 => DefaultBodyLimit::disable(),
        max => DefaultBodyLimit::max(usize::try_from(max).unwrap_or(usize::MAX)),
    };

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);
    let routes = Router::new()
        .merge(version_routes())
        .merge(video_routes())
        .merge(health_routes());

    with_uploaded_files(routes, &state.config.storage)
        .layer(body_limit)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Release lookup and publishing
fn version_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/version/{platform}",
            get(handlers::version::get_latest_version),
        )
        .route("/version", post(handlers::version::create_version))
}

/// Video upload, bulk lookup and removal
fn video_routes() -> Router<AppState> {
    Router::new()
        .route("/videos/upload", post(handlers::video::upload_video))
        .route("/videos/find", post(handlers::video::find_videos))
        .route(
            "/videos/remove/{video_name}",
            delete(handlers::video::remove_video),
        )
}

/// Uploaded files, served read-only from the upload directory under the
/// public prefix. Range requests and content types are handled by
/// `ServeDir`; an empty prefix serves the directory at the root.
fn with_uploaded_files(router: Router<AppState>, storage: &StorageConfig) -> Router<AppState> {
    let files = ServeDir::new(&storage.upload_dir).append_index_html_on_directories(false);
    match storage.public_prefix.trim_end_matches('/') {
        "" => router.fallback_service(files),
        prefix => router.nest_service(prefix, files),
    }
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
