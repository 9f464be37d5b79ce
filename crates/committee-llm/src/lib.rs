//! Model gateway layer for committee-rs
//!
//! This crate provides the completion-backend abstraction used by the
//! deliberation pipeline. It includes:
//!
//! - Chat request types for prompt-completion calls
//! - A `Provider` trait with one implementation per backend
//! - A `ModelGateway` that walks an ordered provider fallback chain
//! - Concrete OpenAI-compatible provider implementations

pub mod error;
pub mod gateway;
pub mod provider;
pub mod providers;
pub mod request;

// Re-export main types
pub use error::{LlmError, Result};
pub use gateway::{FAILURE_SENTINEL, ModelGateway};
pub use provider::Provider;
pub use providers::{DeepSeekConfig, DeepSeekProvider, OpenAiConfig, OpenAiProvider};
pub use request::ChatRequest;
