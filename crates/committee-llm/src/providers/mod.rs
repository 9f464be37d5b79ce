//! Concrete provider implementations

pub mod deepseek;
pub mod openai;
mod wire;

pub use deepseek::{DeepSeekConfig, DeepSeekProvider};
pub use openai::{OpenAiConfig, OpenAiProvider};
