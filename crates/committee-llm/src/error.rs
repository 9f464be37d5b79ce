//! Error types for model gateway operations

use thiserror::Error;

/// Result type for model gateway operations
pub type Result<T> = std::result::Result<T, LlmError>;

/// Errors that can occur when talking to a completion backend
#[derive(Error, Debug)]
pub enum LlmError {
    /// API request failed
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Invalid API key or authentication failed
    #[error("Invalid API key or authentication failed")]
    AuthenticationFailed,

    /// Rate limit exceeded
    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Model not found
    #[error("Model not found: {0}")]
    ModelNotFound(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Unexpected response format
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// Provider did not answer within the per-call deadline
    #[error("Provider '{provider}' timed out after {timeout_secs}s")]
    Timeout {
        provider: String,
        timeout_secs: u64,
    },

    /// Provider answered 2xx but the body itself signals failure
    #[error("Provider '{provider}' returned a failure reply: {reply}")]
    FailureReply {
        provider: String,
        reply: String,
    },

    /// Every provider in the fallback chain failed
    #[error(
        "All model providers failed ({attempts}); check that your API credentials are configured"
    )]
    AllProvidersFailed {
        /// Per-provider failure summary, e.g. "openai: timeout; deepseek: HTTP 401"
        attempts: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
