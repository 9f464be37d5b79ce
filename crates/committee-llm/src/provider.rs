//! Completion provider trait definition

use crate::{ChatRequest, Result};
use async_trait::async_trait;

/// Trait for completion backends
///
/// Implementations of this trait provide access to one concrete backend
/// (e.g., OpenAI, DeepSeek). The gateway holds them in an explicit priority
/// list and falls through the list on failure.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Send one prompt-completion request and return the reply text
    ///
    /// # Arguments
    ///
    /// * `request` - System and user prompts plus generation parameters
    ///
    /// # Returns
    ///
    /// The assistant's reply text on success
    async fn send(&self, request: &ChatRequest) -> Result<String>;

    /// Get the provider name (e.g., "openai", "deepseek")
    fn name(&self) -> &str;
}
