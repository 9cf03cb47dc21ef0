//! Integration tests for the health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_health_reports_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["storage"], "available");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
    assert!(response.body["uptime_seconds"].as_u64().is_some());
}

#[tokio::test]
async fn test_health_degrades_without_upload_dir() {
    let app = helpers::TestApp::new().await;
    std::fs::remove_dir_all(&app.upload_dir).unwrap();

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["storage"], "unavailable");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/nope/at/all").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
