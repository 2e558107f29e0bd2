use secrecy::{ExposeSecret, Secret};
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;
use std::path::PathBuf;

/// Inbound JSON payload limit (10 MB).
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 10 * 1024 * 1024;

const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub models: ModelConfig,
    pub frontend: FrontendConfig,
    pub otlp_endpoint: Option<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Secret<String>,
    pub base_url: String,
    /// Per-request timeout; `None` leaves the client default (no timeout).
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Used when a chat request does not name a model.
    pub chat_model: String,
    pub image_model: String,
    /// Used when an image request does not name a size.
    pub image_size: String,
}

#[derive(Debug, Clone)]
pub struct FrontendConfig {
    pub static_dir: PathBuf,
    pub body_limit_bytes: usize,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            chat_model: "gpt-5".to_string(),
            image_model: "gpt-image-1".to_string(),
            image_size: "1024x1024".to_string(),
        }
    }
}

impl RelayConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";
        let model_defaults = ModelConfig::default();

        Ok(RelayConfig {
            common: common_config,
            openai: OpenAiConfig {
                api_key: Secret::new(get_env("OPENAI_API_KEY", Some(""), is_prod)?),
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), false)?,
                timeout_secs: env::var("OPENAI_TIMEOUT_SECS")
                    .ok()
                    .map(|value| {
                        value.parse().map_err(|e| {
                            AppError::ConfigError(anyhow::anyhow!(
                                "OPENAI_TIMEOUT_SECS must be a whole number of seconds: {}",
                                e
                            ))
                        })
                    })
                    .transpose()?,
            },
            models: ModelConfig {
                chat_model: get_env("RELAY_CHAT_MODEL", Some(&model_defaults.chat_model), false)?,
                image_model: get_env(
                    "RELAY_IMAGE_MODEL",
                    Some(&model_defaults.image_model),
                    false,
                )?,
                image_size: get_env("RELAY_IMAGE_SIZE", Some(&model_defaults.image_size), false)?,
            },
            frontend: FrontendConfig {
                static_dir: PathBuf::from(get_env("RELAY_STATIC_DIR", Some("public"), false)?),
                body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            },
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|v| !v.is_empty()),
        })
    }

    /// Whether a provider credential is present.
    pub fn has_api_key(&self) -> bool {
        !self.openai.api_key.expose_secret().is_empty()
    }
}

/// Read `key`, falling back to `default` outside production. In production a
/// missing variable is an error even when a default exists.
fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
