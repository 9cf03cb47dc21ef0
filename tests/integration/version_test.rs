//! Integration tests for version publishing and lookup.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_version_returns_stored_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/version",
            Some(json!({
                "platform": "windows",
                "version": "1.4.0-rc.1+build.7",
                "file_url": "https://cdn.example.com/win/setup 1.4.0.exe?x=1&y=ü",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["id"].as_i64().is_some());
    assert_eq!(response.body["platform"], "windows");
    assert_eq!(response.body["version"], "1.4.0-rc.1+build.7");
    assert_eq!(
        response.body["file_url"],
        "https://cdn.example.com/win/setup 1.4.0.exe?x=1&y=ü"
    );
}

#[tokio::test]
async fn test_latest_is_last_inserted_not_highest_semver() {
    let app = helpers::TestApp::new().await;

    for version in ["2.0.0", "1.0.0"] {
        let response = app
            .request(
                "POST",
                "/version",
                Some(json!({
                    "platform": "android",
                    "version": version,
                    "file_url": format!("/apk/{version}.apk"),
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    app.request(
        "POST",
        "/version",
        Some(json!({ "platform": "ios", "version": "9.9.9", "file_url": "/ipa" })),
    )
    .await;

    let response = app.request("GET", "/version/android", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["platform"], "android");
    assert_eq!(response.body["version"], "1.0.0");
    assert_eq!(response.body["file_url"], "/apk/1.0.0.apk");
}

#[tokio::test]
async fn test_duplicate_versions_are_allowed() {
    let app = helpers::TestApp::new().await;
    let body = json!({ "platform": "linux", "version": "1.0.0", "file_url": "/a" });

    let first = app.request("POST", "/version", Some(body.clone())).await;
    let second = app.request("POST", "/version", Some(body)).await;

    assert_eq!(first.status, StatusCode::OK);
    assert_eq!(second.status, StatusCode::OK);
    assert_ne!(first.body["id"], second.body["id"]);

    let latest = app.request("GET", "/version/linux", None).await;
    assert_eq!(latest.body["id"], second.body["id"]);
}

#[tokio::test]
async fn test_unknown_platform_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/version/nonexistent", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
    assert_eq!(response.body["message"], "Version not found");
}

#[tokio::test]
async fn test_empty_strings_are_accepted() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/version",
            Some(json!({ "platform": "web", "version": "", "file_url": "" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["version"], "");
}

#[tokio::test]
async fn test_wrong_field_type_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/version",
            Some(json!({ "platform": "web", "version": 3, "file_url": "/x" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_versions")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_missing_field_and_bad_json_are_rejected() {
    let app = helpers::TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/version",
            Some(json!({ "platform": "web", "version": "1" })),
        )
        .await;
    assert_eq!(missing.status, StatusCode::UNPROCESSABLE_ENTITY);

    let syntax = app
        .request_raw("POST", "/version", "application/json", "{not json")
        .await;
    assert_eq!(syntax.status, StatusCode::BAD_REQUEST);
    assert_eq!(syntax.body["error"], "VALIDATION_ERROR");
}
