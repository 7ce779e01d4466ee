use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Http(String),

    #[error("API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("model returned no text")]
    EmptyResponse,

    #[error("generation timed out after {0:?}")]
    Timeout(Duration),

    #[error("text generation is not configured: {0}")]
    NotConfigured(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(e: reqwest::Error) -> Self {
        ServiceError::Http(e.to_string())
    }
}

/// Abstraction over a "prompt in, text out" model call.
///
/// Handlers program against this trait.
/// `OpenAiGenerator` talks to an OpenAI-compatible chat completions API.
/// `TimeoutGenerator` bounds any generator by a fixed deadline.
/// `MockGenerator` returns scripted replies for tests.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name for logging and the health endpoint.
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str, system_instruction: &str)
        -> Result<String, ServiceError>;
}
