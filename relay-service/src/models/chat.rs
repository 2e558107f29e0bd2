use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    /// Overrides the configured default model.
    #[serde(default)]
    pub model: Option<serde_json::Value>,
}

/// Successful `POST /chat` response.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: Option<String>,
    /// Token accounting as reported by the provider.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<serde_json::Value>,
}
