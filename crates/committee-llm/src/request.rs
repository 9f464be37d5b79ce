//! Chat request types shared by all providers

/// A single prompt-completion request as the pipeline sees it
///
/// Providers translate this into their own wire format. The system prompt
/// carries the persona instructions, the user prompt carries the assembled
/// round context.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// System prompt (persona instructions)
    pub system: String,

    /// User prompt (factual context plus peer digests)
    pub user: String,

    /// Maximum tokens the backend may generate
    pub max_tokens: usize,

    /// Sampling temperature (0.0-1.0)
    pub temperature: f32,
}

impl ChatRequest {
    /// Create a request with default generation parameters
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            max_tokens: 1024,
            temperature: 0.7,
        }
    }

    /// Set the maximum tokens
    pub fn max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}
