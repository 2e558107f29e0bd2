//! Mock provider implementation for testing.

use super::{
    ChatChoice, ChatCompletion, ChatCompletionParams, ChoiceMessage, GeneratedImage,
    GenerativeProvider, ImageGeneration, ImageGenerationParams, ProviderError,
};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock provider returning scripted results and recording every call.
pub struct MockProvider {
    chat_result: Result<ChatCompletion, ProviderError>,
    image_result: Result<ImageGeneration, ProviderError>,
    configured: bool,
    chat_calls: Mutex<Vec<ChatCompletionParams>>,
    image_calls: Mutex<Vec<ImageGenerationParams>>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            chat_result: Ok(ChatCompletion::default()),
            image_result: Ok(ImageGeneration::default()),
            configured: true,
            chat_calls: Mutex::new(Vec::new()),
            image_calls: Mutex::new(Vec::new()),
        }
    }

    /// Answer chat calls with a single choice and the given usage.
    pub fn with_chat_reply(mut self, content: &str, usage: serde_json::Value) -> Self {
        self.chat_result = Ok(ChatCompletion {
            choices: vec![ChatChoice {
                message: ChoiceMessage {
                    content: Some(content.to_string()),
                },
            }],
            usage: Some(usage),
        });
        self
    }

    pub fn with_chat_completion(mut self, completion: ChatCompletion) -> Self {
        self.chat_result = Ok(completion);
        self
    }

    pub fn with_chat_error(mut self, error: ProviderError) -> Self {
        self.chat_result = Err(error);
        self
    }

    /// Answer image calls with a single image at `url`.
    pub fn with_image_url(mut self, url: &str) -> Self {
        self.image_result = Ok(ImageGeneration {
            data: vec![GeneratedImage {
                url: Some(url.to_string()),
            }],
        });
        self
    }

    pub fn with_image_error(mut self, error: ProviderError) -> Self {
        self.image_result = Err(error);
        self
    }

    pub fn unconfigured(mut self) -> Self {
        self.configured = false;
        self
    }

    pub fn chat_calls(&self) -> Vec<ChatCompletionParams> {
        self.chat_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn image_calls(&self) -> Vec<ImageGenerationParams> {
        self.image_calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl GenerativeProvider for MockProvider {
    async fn chat_completion(
        &self,
        params: &ChatCompletionParams,
    ) -> Result<ChatCompletion, ProviderError> {
        if let Ok(mut calls) = self.chat_calls.lock() {
            calls.push(params.clone());
        }
        self.chat_result.clone()
    }

    async fn generate_image(
        &self,
        params: &ImageGenerationParams,
    ) -> Result<ImageGeneration, ProviderError> {
        if let Ok(mut calls) = self.image_calls.lock() {
            calls.push(params.clone());
        }
        self.image_result.clone()
    }

    fn is_configured(&self) -> bool {
        self.configured
    }
}
