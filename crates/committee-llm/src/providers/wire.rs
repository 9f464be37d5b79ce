//! OpenAI-compatible chat completions wire format
//!
//! Both supported backends speak the same request/response shape:
//! `{model, messages, max_tokens, temperature}` in,
//! `{choices: [{message: {content}}]}` out. Provider modules own their
//! configuration and defaults and delegate the HTTP exchange here.

use crate::{ChatRequest, LlmError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct WireRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub max_tokens: usize,
    pub temperature: f32,
}

#[derive(Debug, Serialize)]
pub(crate) struct WireMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponse {
    pub choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireChoice {
    pub message: WireResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WireResponseMessage {
    pub content: String,
}

impl WireRequest {
    pub(crate) fn from_chat(model: &str, request: &ChatRequest) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                WireMessage {
                    role: "system",
                    content: request.system.clone(),
                },
                WireMessage {
                    role: "user",
                    content: request.user.clone(),
                },
            ],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

/// POST one chat completion and extract the first choice's content
pub(crate) async fn post_chat(
    client: &Client,
    api_base: &str,
    api_key: &str,
    model: &str,
    request: &ChatRequest,
) -> Result<String> {
    let wire = WireRequest::from_chat(model, request);

    let response = client
        .post(format!("{api_base}/chat/completions"))
        .header("Authorization", format!("Bearer {api_key}"))
        .header("Content-Type", "application/json")
        .json(&wire)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await?;

        return Err(match status.as_u16() {
            401 => LlmError::AuthenticationFailed,
            429 => LlmError::RateLimitExceeded(error_text),
            400 => LlmError::InvalidRequest(error_text),
            404 => LlmError::ModelNotFound(model.to_string()),
            _ => LlmError::RequestFailed(format!("HTTP {status}: {error_text}")),
        });
    }

    let body: WireResponse = response
        .json()
        .await
        .map_err(|e| LlmError::UnexpectedResponse(format!("Failed to parse response: {e}")))?;

    let choice = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::UnexpectedResponse("No choices in response".to_string()))?;

    Ok(choice.message.content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_request_shape() {
        let request = ChatRequest::new("sys", "usr").max_tokens(256).temperature(0.2);
        let wire = WireRequest::from_chat("gpt-4o-mini", &request);

        let value = serde_json::to_value(&wire).expect("serializes");
        assert_eq!(value["model"], "gpt-4o-mini");
        assert_eq!(value["max_tokens"], 256);
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][0]["content"], "sys");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "usr");
    }

    #[test]
    fn test_wire_response_parsing() {
        let body = r#"{"choices":[{"message":{"content":"hello","role":"assistant"}}]}"#;
        let parsed: WireResponse = serde_json::from_str(body).expect("parses");
        assert_eq!(parsed.choices[0].message.content, "hello");
    }
}
