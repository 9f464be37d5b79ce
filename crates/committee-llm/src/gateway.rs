//! Model gateway with an ordered provider fallback chain
//!
//! The gateway tries each registered provider in priority order and returns
//! the first usable reply. Internally every failure mode is a typed
//! [`LlmError`]; the [`ModelGateway::complete`] boundary additionally folds
//! exhaustion into a sentinel-prefixed string so callers that want a plain
//! text value never have to handle an error.

use crate::{ChatRequest, LlmError, Provider, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Marker prefix that signals a failed completion through a plain string
pub const FAILURE_SENTINEL: &str = "[analysis unavailable]";

/// Gateway over an ordered list of completion providers
pub struct ModelGateway {
    providers: Vec<Arc<dyn Provider>>,
}

impl ModelGateway {
    /// Create a gateway with providers in fallback priority order
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self { providers }
    }

    /// Names of the registered providers, in fallback order
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Try each provider in order and return the first usable reply
    ///
    /// A provider attempt fails on request error, on exceeding `timeout`, or
    /// on a reply that itself starts with the failure sentinel. When every
    /// provider fails the error carries a per-provider failure summary and a
    /// hint to check credentials.
    #[instrument(skip(self, request), fields(providers = self.providers.len()))]
    pub async fn try_complete(&self, request: &ChatRequest, timeout: Duration) -> Result<String> {
        let mut attempts: Vec<String> = Vec::new();

        for provider in &self.providers {
            match tokio::time::timeout(timeout, provider.send(request)).await {
                Ok(Ok(text)) => {
                    if text.trim_start().starts_with(FAILURE_SENTINEL) {
                        warn!(provider = provider.name(), "provider returned a failure reply");
                        attempts.push(
                            LlmError::FailureReply {
                                provider: provider.name().to_string(),
                                reply: text,
                            }
                            .to_string(),
                        );
                        continue;
                    }
                    debug!(provider = provider.name(), chars = text.len(), "completion succeeded");
                    return Ok(text);
                }
                Ok(Err(err)) => {
                    warn!(provider = provider.name(), error = %err, "provider call failed");
                    attempts.push(format!("{}: {err}", provider.name()));
                }
                Err(_) => {
                    let err = LlmError::Timeout {
                        provider: provider.name().to_string(),
                        timeout_secs: timeout.as_secs(),
                    };
                    warn!(provider = provider.name(), error = %err, "provider call timed out");
                    attempts.push(err.to_string());
                }
            }
        }

        if attempts.is_empty() {
            attempts.push("no providers configured".to_string());
        }

        Err(LlmError::AllProvidersFailed {
            attempts: attempts.join("; "),
        })
    }

    /// Like [`try_complete`](Self::try_complete), but never fails
    ///
    /// On exhaustion the error is rendered into a sentinel-prefixed string,
    /// so the result is always a non-empty text value.
    pub async fn complete(&self, request: &ChatRequest, timeout: Duration) -> String {
        match self.try_complete(request, timeout).await {
            Ok(text) => text,
            Err(err) => format!("{FAILURE_SENTINEL} {err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Behavior {
        Reply(&'static str),
        Fail,
        SentinelReply,
        Hang,
    }

    struct FakeProvider {
        name: &'static str,
        behavior: Behavior,
        calls: AtomicUsize,
    }

    impl FakeProvider {
        fn new(name: &'static str, behavior: Behavior) -> Arc<Self> {
            Arc::new(Self {
                name,
                behavior,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Provider for FakeProvider {
        async fn send(&self, _request: &ChatRequest) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.behavior {
                Behavior::Reply(text) => Ok(text.to_string()),
                Behavior::Fail => Err(LlmError::RequestFailed("boom".to_string())),
                Behavior::SentinelReply => Ok(format!("{FAILURE_SENTINEL} backend degraded")),
                Behavior::Hang => {
                    tokio::time::sleep(Duration::from_secs(3600)).await;
                    Ok("too late".to_string())
                }
            }
        }

        fn name(&self) -> &str {
            self.name
        }
    }

    fn request() -> ChatRequest {
        ChatRequest::new("system", "user")
    }

    #[tokio::test]
    async fn test_first_provider_wins() {
        let primary = FakeProvider::new("primary", Behavior::Reply("from primary"));
        let secondary = FakeProvider::new("secondary", Behavior::Reply("from secondary"));
        let gateway = ModelGateway::new(vec![primary.clone(), secondary.clone()]);

        let reply = gateway
            .try_complete(&request(), Duration::from_secs(5))
            .await
            .expect("primary succeeds");

        assert_eq!(reply, "from primary");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn test_fallback_on_provider_error() {
        let primary = FakeProvider::new("primary", Behavior::Fail);
        let secondary = FakeProvider::new("secondary", Behavior::Reply("rescued"));
        let gateway = ModelGateway::new(vec![primary.clone(), secondary.clone()]);

        let reply = gateway
            .try_complete(&request(), Duration::from_secs(5))
            .await
            .expect("secondary succeeds");

        assert_eq!(reply, "rescued");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_sentinel_reply_counts_as_failure() {
        let primary = FakeProvider::new("primary", Behavior::SentinelReply);
        let secondary = FakeProvider::new("secondary", Behavior::Reply("clean"));
        let gateway = ModelGateway::new(vec![primary, secondary]);

        let reply = gateway
            .try_complete(&request(), Duration::from_secs(5))
            .await
            .expect("secondary succeeds");

        assert_eq!(reply, "clean");
    }

    #[tokio::test(start_paused = true)]
    async fn test_hung_provider_times_out_and_falls_through() {
        let primary = FakeProvider::new("primary", Behavior::Hang);
        let secondary = FakeProvider::new("secondary", Behavior::Reply("still here"));
        let gateway = ModelGateway::new(vec![primary, secondary.clone()]);

        let reply = gateway
            .try_complete(&request(), Duration::from_secs(10))
            .await
            .expect("secondary succeeds after timeout");

        assert_eq!(reply, "still here");
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn test_exhaustion_returns_typed_error() {
        let primary = FakeProvider::new("primary", Behavior::Fail);
        let secondary = FakeProvider::new("secondary", Behavior::Fail);
        let gateway = ModelGateway::new(vec![primary, secondary]);

        let err = gateway
            .try_complete(&request(), Duration::from_secs(5))
            .await
            .expect_err("all providers fail");

        let msg = err.to_string();
        assert!(msg.contains("primary"));
        assert!(msg.contains("secondary"));
        assert!(msg.contains("credentials"));
    }

    #[tokio::test]
    async fn test_complete_degrades_to_sentinel_string() {
        let gateway = ModelGateway::new(vec![FakeProvider::new("only", Behavior::Fail)]);

        let reply = gateway.complete(&request(), Duration::from_secs(5)).await;

        assert!(!reply.is_empty());
        assert!(reply.starts_with(FAILURE_SENTINEL));
        assert!(reply.contains("credentials"));
    }

    #[tokio::test]
    async fn test_empty_gateway_is_exhausted() {
        let gateway = ModelGateway::new(vec![]);

        let err = gateway
            .try_complete(&request(), Duration::from_secs(5))
            .await
            .expect_err("nothing to try");

        assert!(err.to_string().contains("no providers configured"));
    }
}
