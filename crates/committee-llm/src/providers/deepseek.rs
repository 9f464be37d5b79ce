//! DeepSeek provider implementation
//!
//! DeepSeek exposes an OpenAI-compatible chat completions endpoint, so this
//! provider only differs from the OpenAI one in its defaults and credentials.
//! See: https://api-docs.deepseek.com

use crate::providers::wire;
use crate::{ChatRequest, LlmError, Provider, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

const DEFAULT_DEEPSEEK_API_BASE: &str = "https://api.deepseek.com/v1";
const DEFAULT_DEEPSEEK_MODEL: &str = "deepseek-chat";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Configuration for the DeepSeek provider
#[derive(Debug, Clone)]
pub struct DeepSeekConfig {
    /// API key for authentication
    pub api_key: String,

    /// Base URL for the DeepSeek API (default: "https://api.deepseek.com/v1")
    pub api_base: String,

    /// Model identifier to request (default: "deepseek-chat")
    pub model: String,

    /// Request timeout in seconds (default: 120)
    pub timeout_secs: u64,
}

impl DeepSeekConfig {
    /// Create a new config with the given API key and default settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base: DEFAULT_DEEPSEEK_API_BASE.to_string(),
            model: DEFAULT_DEEPSEEK_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Create config from environment variables
    ///
    /// Reads the API key from `DEEPSEEK_API_KEY`. Optionally reads
    /// `DEEPSEEK_API_BASE` and `DEEPSEEK_MODEL` if set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("DEEPSEEK_API_KEY").map_err(|_| {
            LlmError::ConfigurationError(
                "DEEPSEEK_API_KEY environment variable not set".to_string(),
            )
        })?;

        let mut config = Self::new(api_key);
        if let Ok(base) = std::env::var("DEEPSEEK_API_BASE") {
            config.api_base = base;
        }
        if let Ok(model) = std::env::var("DEEPSEEK_MODEL") {
            config.model = model;
        }
        Ok(config)
    }

    /// Set custom API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set the model identifier
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// DeepSeek provider
pub struct DeepSeekProvider {
    client: Client,
    config: DeepSeekConfig,
}

impl DeepSeekProvider {
    /// Create a new DeepSeek provider with custom configuration
    pub fn with_config(config: DeepSeekConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new DeepSeek provider with API key and default settings
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(DeepSeekConfig::new(api_key))
    }

    /// Create a provider from environment variables
    pub fn from_env() -> Result<Self> {
        Self::with_config(DeepSeekConfig::from_env()?)
    }

    /// Get the current configuration
    pub fn config(&self) -> &DeepSeekConfig {
        &self.config
    }
}

#[async_trait]
impl Provider for DeepSeekProvider {
    #[instrument(skip(self, request), fields(model = %self.config.model, api_base = %self.config.api_base))]
    async fn send(&self, request: &ChatRequest) -> Result<String> {
        debug!("Sending request to DeepSeek API at {}", self.config.api_base);
        wire::post_chat(
            &self.client,
            &self.config.api_base,
            &self.config.api_key,
            &self.config.model,
            request,
        )
        .await
    }

    fn name(&self) -> &'static str {
        "deepseek"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = DeepSeekProvider::new("test-key").expect("provider builds");
        assert_eq!(provider.name(), "deepseek");
        assert_eq!(provider.config().api_base, "https://api.deepseek.com/v1");
        assert_eq!(provider.config().model, "deepseek-chat");
    }

    #[test]
    fn test_provider_with_custom_config() {
        let config = DeepSeekConfig::new("test-key")
            .with_api_base("http://localhost:8000/v1")
            .with_model("deepseek-reasoner")
            .with_timeout(30);

        let provider = DeepSeekProvider::with_config(config).expect("provider builds");
        assert_eq!(provider.config().api_base, "http://localhost:8000/v1");
        assert_eq!(provider.config().model, "deepseek-reasoner");
        assert_eq!(provider.config().timeout_secs, 30);
    }
}
