#![allow(dead_code)]

use axum::{body::Body, http::Request, Router};
use http_body_util::BodyExt;
use relay_service::config::{
    FrontendConfig, ModelConfig, OpenAiConfig, RelayConfig, DEFAULT_BODY_LIMIT_BYTES,
};
use relay_service::services::providers::mock::MockProvider;
use relay_service::{build_router, AppState};
use secrecy::Secret;
use std::path::Path;
use std::sync::Arc;

pub const TEST_CHAT_MODEL: &str = "test-chat-model";

pub fn test_config(static_dir: &Path) -> RelayConfig {
    RelayConfig {
        common: service_core::config::Config { port: 0 },
        openai: OpenAiConfig {
            api_key: Secret::new("test-api-key".to_string()),
            base_url: "http://127.0.0.1:1/v1".to_string(),
            timeout_secs: Some(5),
        },
        models: ModelConfig {
            chat_model: TEST_CHAT_MODEL.to_string(),
            ..ModelConfig::default()
        },
        frontend: FrontendConfig {
            static_dir: static_dir.to_path_buf(),
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        },
        otlp_endpoint: None,
    }
}

/// Router backed by `provider`, serving static files from a directory that
/// does not exist.
pub fn test_app(provider: Arc<MockProvider>) -> Router {
    app_with_static_dir(provider, Path::new("/nonexistent-relay-static"))
}

pub fn app_with_static_dir(provider: Arc<MockProvider>, static_dir: &Path) -> Router {
    build_router(AppState::new(test_config(static_dir), provider))
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// `POST` with a raw body and an optional content type.
pub fn post_raw(uri: &str, content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(value) = content_type {
        builder = builder.header("content-type", value);
    }
    builder.body(Body::from(body)).unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
