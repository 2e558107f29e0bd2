use serde::{Deserialize, Serialize};

/// Body of `POST /image`.
#[derive(Debug, Default, Deserialize)]
pub struct ImageRequest {
    #[serde(default)]
    pub prompt: Option<serde_json::Value>,
    /// e.g. "1024x1024"; falls back to the configured size.
    #[serde(default)]
    pub size: Option<serde_json::Value>,
}

/// Successful `POST /image` response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageResponse {
    pub image_url: String,
}
