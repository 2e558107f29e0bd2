pub mod metrics;
pub mod providers;

pub use providers::{openai::OpenAiProvider, GenerativeProvider, ProviderError};
