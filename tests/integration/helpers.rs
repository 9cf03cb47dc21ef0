//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::SqlitePool;
use tempfile::TempDir;
use tower::ServiceExt;

use webupdater_api::state::AppState;
use webupdater_core::config::{AppConfig, DatabaseConfig, StorageConfig};
use webupdater_database::DatabasePool;
use webupdater_database::repositories::version::VersionRepository;
use webupdater_database::repositories::video::VideoRepository;
use webupdater_service::{VersionService, VideoService};
use webupdater_storage::LocalStorageProvider;

const BOUNDARY: &str = "webupdater-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: SqlitePool,
    /// Directory holding uploaded files
    pub upload_dir: PathBuf,
    /// Application config
    pub config: AppConfig,
    _dir: TempDir,
}

impl TestApp {
    /// Create a new test application backed by a throwaway database and
    /// upload directory.
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let upload_dir = dir.path().join("videos");

        let config = AppConfig {
            database: DatabaseConfig {
                url: format!("sqlite://{}", dir.path().join("app.db").display()),
                ..DatabaseConfig::default()
            },
            storage: StorageConfig {
                upload_dir: upload_dir.display().to_string(),
                ..StorageConfig::default()
            },
            ..AppConfig::default()
        };

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database");

        webupdater_database::migration::run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");

        let storage = LocalStorageProvider::new(&upload_dir)
            .await
            .expect("Failed to init storage");

        let version_service = Arc::new(VersionService::new(Arc::new(VersionRepository::new(
            db.pool().clone(),
        ))));
        let video_service = Arc::new(VideoService::new(
            Arc::new(VideoRepository::new(db.pool().clone())),
            Arc::new(storage),
            config.storage.clone(),
        ));

        let app_state = AppState {
            config: Arc::new(config.clone()),
            db: db.clone(),
            version_service,
            video_service,
            started_at: Instant::now(),
        };

        let router = webupdater_api::build_router(app_state);

        Self {
            router,
            db_pool: db.pool().clone(),
            upload_dir,
            config,
            _dir: dir,
        }
    }

    /// Make a JSON request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a raw body with an explicit content type
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        content_type: &str,
        body: impl Into<Body>,
    ) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", content_type)
            .body(body.into())
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Upload a video through the multipart endpoint
    pub async fn upload(&self, name: &str, file_name: &str, content: &[u8]) -> TestResponse {
        let body = multipart_body(&[
            Part::Text { name: "name", value: name },
            Part::File {
                name: "file",
                file_name,
                content,
            },
        ]);

        self.request_raw(
            "POST",
            "/videos/upload",
            &format!("multipart/form-data; boundary={BOUNDARY}"),
            body,
        )
        .await
    }

    /// Fetch a path without a body, e.g. a stored file
    pub async fn get(&self, path: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Fetch a path with one extra request header, e.g. `Range`
    pub async fn get_with_header(&self, path: &str, name: &str, value: &str) -> TestResponse {
        let req = Request::builder()
            .method("GET")
            .uri(path)
            .header(name, value)
            .body(Body::empty())
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Number of files currently in the upload directory
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(&self.upload_dir)
            .expect("Failed to read upload dir")
            .count()
    }

    async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let content_type = headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body")
            .to_vec();

        let body: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            content_type,
            body,
            bytes,
        }
    }
}

/// One part of a multipart form
pub enum Part<'a> {
    /// Plain text field
    Text { name: &'a str, value: &'a str },
    /// File field
    File {
        name: &'a str,
        file_name: &'a str,
        content: &'a [u8],
    },
}

/// Encode parts as a `multipart/form-data` body using [`BOUNDARY`]
pub fn multipart_body(parts: &[Part<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            Part::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                );
                body.extend_from_slice(value.as_bytes());
            }
            Part::File {
                name,
                file_name,
                content,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(content);
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

/// Multipart content type header value matching [`multipart_body`]
pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Content-Type header, if any
    pub content_type: Option<String>,
    /// Parsed JSON body (`Null` when not JSON)
    pub body: Value,
    /// Raw body bytes
    pub bytes: Vec<u8>,
}
