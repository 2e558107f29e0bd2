//! Frontend hosting: unmatched paths resolve to files in the static directory.

mod common;

use axum::http::StatusCode;
use common::{app_with_static_dir, body_text, get};
use relay_service::services::providers::mock::MockProvider;
use std::sync::Arc;
use tower::ServiceExt;

fn frontend_dir() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>relay</h1>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('relay');").unwrap();
    dir
}

#[tokio::test]
async fn root_serves_index_html() {
    let dir = frontend_dir();
    let app = app_with_static_dir(Arc::new(MockProvider::new()), dir.path());

    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "<h1>relay</h1>");
}

#[tokio::test]
async fn asset_is_served_with_content_type() {
    let dir = frontend_dir();
    let app = app_with_static_dir(Arc::new(MockProvider::new()), dir.path());

    let response = app.oneshot(get("/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.contains("javascript"), "got {content_type}");
    assert_eq!(body_text(response).await, "console.log('relay');");
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = frontend_dir();
    let app = app_with_static_dir(Arc::new(MockProvider::new()), dir.path());

    let response = app.oneshot(get("/missing.txt")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_routes_take_precedence_over_files() {
    let dir = frontend_dir();
    std::fs::write(dir.path().join("health"), "shadowed").unwrap();
    let app = app_with_static_dir(Arc::new(MockProvider::new()), dir.path());

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("relay-service"));
}
