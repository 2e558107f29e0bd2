//! End-to-end tests against a running relay-service instance.
//!
//! The application is bound to a random port with the mock provider injected.

mod common;

use relay_service::services::providers::mock::MockProvider;
use relay_service::startup::Application;
use reqwest::Client;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// Spawn the application on a random port and return the port number.
async fn spawn_app(provider: Arc<MockProvider>) -> u16 {
    let dir = std::env::temp_dir();
    let app = Application::build_with_provider(common::test_config(&dir), provider)
        .await
        .expect("Failed to build application");

    let port = app.port();

    // Spawn the server in the background
    tokio::spawn(async move {
        let _ = app.run_until_stopped().await;
    });

    port
}

#[tokio::test]
async fn health_check_returns_ok() {
    let port = spawn_app(Arc::new(MockProvider::new())).await;
    let client = Client::new();

    let response = client
        .get(format!("http://127.0.0.1:{}/health", port))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "relay-service");
}

#[tokio::test]
async fn chat_round_trip_over_tcp() {
    let provider = Arc::new(MockProvider::new().with_chat_reply("Hello", json!({ "total_tokens": 5 })));
    let port = spawn_app(provider.clone()).await;
    let client = Client::new();

    let response = client
        .post(format!("http://127.0.0.1:{}/chat", port))
        .json(&json!({ "message": "hi" }))
        .timeout(Duration::from_secs(5))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!({ "reply": "Hello", "usage": { "total_tokens": 5 } }));
    assert_eq!(provider.chat_calls().len(), 1);
}
