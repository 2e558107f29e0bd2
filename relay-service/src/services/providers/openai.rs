//! OpenAI provider implementation.
//!
//! Calls the chat completions and image generations endpoints of the OpenAI
//! REST API, or of any server exposing the same shapes at `base_url`.

use super::{
    ChatCompletion, ChatCompletionParams, GenerativeProvider, ImageGeneration,
    ImageGenerationParams, ProviderError,
};
use crate::config::OpenAiConfig;
use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// OpenAI text and image provider.
pub struct OpenAiProvider {
    config: OpenAiConfig,
    client: Client,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self, ProviderError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| ProviderError::Network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Build the API URL for the given endpoint path.
    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ProviderError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .client
            .post(self.api_url(path))
            .bearer_auth(self.config.api_key.expose_secret())
            .json(body)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(api_error(response).await);
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("Failed to parse response: {}", e)))
    }
}

/// Turn a non-success response into an [`ProviderError::Api`], preferring the
/// provider's own `error.message`.
async fn api_error(response: Response) -> ProviderError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ApiErrorBody>(&body) {
        Ok(ApiErrorBody {
            error: ApiErrorDetail {
                message: Some(message),
            },
        }) => message,
        _ if body.trim().is_empty() => format!("{} status code (no body)", status.as_u16()),
        _ => format!("{} {}", status.as_u16(), body.trim()),
    };

    tracing::warn!(status = status.as_u16(), "OpenAI API returned an error status");

    ProviderError::Api {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl GenerativeProvider for OpenAiProvider {
    async fn chat_completion(
        &self,
        params: &ChatCompletionParams,
    ) -> Result<ChatCompletion, ProviderError> {
        tracing::debug!(
            model = %params.model,
            message_count = params.messages.len(),
            "Sending chat completion request to OpenAI"
        );

        self.post_json("chat/completions", params).await
    }

    async fn generate_image(
        &self,
        params: &ImageGenerationParams,
    ) -> Result<ImageGeneration, ProviderError> {
        tracing::debug!(
            model = %params.model,
            size = %params.size,
            prompt_len = params.prompt.len(),
            "Sending image generation request to OpenAI"
        );

        self.post_json("images/generations", params).await
    }

    fn is_configured(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
    }
}

// ============================================================================
// OpenAI API Error Types
// ============================================================================

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: Option<String>,
}
