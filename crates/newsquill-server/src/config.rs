use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use newsquill_service::{OpenAiConfig, OpenAiGenerator, TextGenerator, TimeoutGenerator};
use tracing::warn;

#[derive(Debug, Parser)]
#[command(
    name = "newsquill-server",
    about = "Writing prompts and feedback for English learners, generated from news articles"
)]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "NEWSQUILL_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "NEWSQUILL_PORT", default_value = "3720")]
    pub port: u16,

    /// API key for the text generation service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = "https://api.openai.com/v1")]
    pub base_url: String,

    /// Model name sent with every completion request
    #[arg(long, env = "NEWSQUILL_MODEL", default_value = "gpt-4o-mini")]
    pub model: String,

    /// Sampling temperature
    #[arg(long, env = "NEWSQUILL_TEMPERATURE", default_value = "0.7")]
    pub temperature: f32,

    /// Maximum tokens per completion
    #[arg(long, env = "NEWSQUILL_MAX_TOKENS", default_value = "1024")]
    pub max_tokens: u32,

    /// Seconds to wait for a single generation before using the fallback.
    #[arg(long, env = "NEWSQUILL_TIMEOUT_SECS", default_value = "30")]
    pub timeout_secs: u64,
}

impl ServerConfig {
    pub fn addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .bind
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn openai_config(&self) -> OpenAiConfig {
        OpenAiConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone().filter(|k| !k.is_empty()),
            model: self.model.clone(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }

    /// The generator every handler shares, bounded by the configured timeout.
    pub fn build_generator(&self) -> Arc<dyn TextGenerator> {
        let openai = self.openai_config();
        if openai.api_key.is_none() {
            warn!("no API key configured; requests to {} are sent unauthenticated", openai.base_url);
        }
        Arc::new(TimeoutGenerator::new(
            OpenAiGenerator::new(openai),
            self.timeout(),
        ))
    }
}
