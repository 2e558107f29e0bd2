//! Generative AI provider abstraction.
//!
//! Handlers talk to the provider through [`GenerativeProvider`] so the real
//! OpenAI client can be swapped for the in-memory mock in tests.

pub mod mock;
pub mod openai;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for provider operations.
///
/// `Display` yields the downstream message alone; it is what callers of the
/// relay receive in the `error` field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, connect, timeout...).
    #[error("{0}")]
    Network(String),

    /// The provider answered 2xx with a body we cannot use.
    #[error("{0}")]
    InvalidResponse(String),
}

/// One entry of a chat conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Arguments of a "create chat completion" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatCompletionParams {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Result of a chat completion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletion {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    /// Token accounting, kept opaque.
    #[serde(default)]
    pub usage: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletion {
    /// Content of the first choice. A `None` content (refusals, tool calls)
    /// is passed through; only a missing choice is an error.
    pub fn first_reply(&self) -> Result<Option<String>, ProviderError> {
        self.choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                ProviderError::InvalidResponse("Provider returned no completion choices".to_string())
            })
    }
}

/// Arguments of a "generate image" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageGenerationParams {
    pub model: String,
    pub prompt: String,
    pub size: String,
    pub n: u32,
}

/// Result of an image generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImageGeneration {
    #[serde(default)]
    pub data: Vec<GeneratedImage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedImage {
    #[serde(default)]
    pub url: Option<String>,
}

impl ImageGeneration {
    /// URL of the first generated image.
    pub fn first_url(&self) -> Result<String, ProviderError> {
        let image = self.data.first().ok_or_else(|| {
            ProviderError::InvalidResponse("Provider returned no images".to_string())
        })?;

        image.url.clone().ok_or_else(|| {
            ProviderError::InvalidResponse("Provider returned an image without a URL".to_string())
        })
    }
}

/// Trait for chat and image generation providers (e.g., OpenAI).
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Create a chat completion.
    async fn chat_completion(
        &self,
        params: &ChatCompletionParams,
    ) -> Result<ChatCompletion, ProviderError>;

    /// Generate images from a prompt.
    async fn generate_image(
        &self,
        params: &ImageGenerationParams,
    ) -> Result<ImageGeneration, ProviderError>;

    /// Whether credentials are present. Does not contact the provider.
    fn is_configured(&self) -> bool;
}
