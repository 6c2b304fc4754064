//! HTTP client for the remote summarization endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::LlmConfig;

/// Maximum number of tokens requested for the completion.
const MAX_COMPLETION_TOKENS: u32 = 300;

/// Instruction prepended to every summarization request.
const SYSTEM_PROMPT: &str =
    "You are a study assistant. Summarize the following note content in 2-3 concise sentences.";

/// Normalized successful result from the remote provider.
#[derive(Debug, Clone)]
pub struct RemoteSummary {
    /// The generated summary text.
    pub text: String,
    /// Identifier of the model that produced it.
    pub model: String,
    /// Provider-reported confidence, when the provider supplies one.
    /// Absent for providers that report none; the caller picks a default.
    pub confidence: Option<f64>,
}

/// Failure classification for one remote summarization attempt.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// No API key is present; the request was never attempted.
    #[error("remote summarizer is not configured")]
    NotConfigured,

    /// The request exceeded the configured timeout.
    #[error("remote summarizer timed out")]
    Timeout,

    /// The provider rejected the credential (HTTP 401/403).
    #[error("remote summarizer rejected the credential")]
    Unauthorized,

    /// Transport failure, non-2xx status, or malformed payload.
    #[error("remote summarizer error: {0}")]
    ServiceError(String),

    /// The provider answered 2xx but returned no usable summary text.
    #[error("remote summarizer returned an empty result")]
    EmptyResult,
}

/// Seam between the orchestration layer and the remote provider, so the
/// fallback policy can be exercised with in-process stubs.
#[async_trait]
pub trait RemoteSummarizer: Send + Sync {
    /// True iff a credential is present.
    fn is_configured(&self) -> bool;

    /// Request a summary of `text`. Exactly one attempt, no retries;
    /// retry policy, if any, belongs to the caller.
    async fn summarize(&self, text: &str) -> Result<RemoteSummary, RemoteError>;
}

/// Response body of the chat-completions endpoint, reduced to the fields
/// this client reads.
#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    choices: Vec<ChatChoice>,
    /// Some gateways attach a score to the completion; OpenAI itself does not.
    confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

/// HTTP client for an OpenAI-compatible chat-completions endpoint.
pub struct LlmClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl LlmClient {
    /// Create a client from configuration.
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (connection
    /// pooling across components).
    pub fn with_client(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }

    /// Classify a transport-level failure.
    fn classify(err: reqwest::Error) -> RemoteError {
        if err.is_timeout() {
            RemoteError::Timeout
        } else {
            RemoteError::ServiceError(err.to_string())
        }
    }
}

#[async_trait]
impl RemoteSummarizer for LlmClient {
    fn is_configured(&self) -> bool {
        self.config.api_key.is_some()
    }

    async fn summarize(&self, text: &str) -> Result<RemoteSummary, RemoteError> {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return Err(RemoteError::NotConfigured);
        };

        let request_id = uuid::Uuid::new_v4().to_string();
        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": MAX_COMPLETION_TOKENS,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": text },
            ],
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(api_key)
            .header("X-Request-Id", &request_id)
            .timeout(self.config.timeout())
            .json(&body)
            .send()
            .await
            .map_err(Self::classify)?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RemoteError::Unauthorized);
        }
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(RemoteError::ServiceError(format!("status {status}: {body}")));
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| RemoteError::ServiceError(format!("malformed response: {e}")))?;

        let summary = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .filter(|content| !content.is_empty())
            .ok_or(RemoteError::EmptyResult)?;

        let model = parsed.model.unwrap_or_else(|| self.config.model.clone());

        tracing::debug!(request_id = %request_id, model = %model, "Remote summary received");

        Ok(RemoteSummary {
            text: summary,
            model,
            confidence: parsed.confidence,
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn config(api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            base_url: "http://localhost:9".into(),
            api_key: api_key.map(String::from),
            model: "test-model".into(),
            timeout_ms: 50,
        }
    }

    #[test]
    fn is_configured_tracks_credential_presence() {
        assert!(!LlmClient::new(config(None)).is_configured());
        assert!(LlmClient::new(config(Some("sk-test"))).is_configured());
    }

    #[tokio::test]
    async fn summarize_without_credential_fails_fast() {
        let client = LlmClient::new(config(None));
        let err = client.summarize("some note text").await.unwrap_err();
        assert_matches!(err, RemoteError::NotConfigured);
    }

    #[test]
    fn empty_choices_deserialize() {
        let parsed: ChatCompletionResponse =
            serde_json::from_str(r#"{"model":"m","choices":[]}"#).unwrap();
        assert!(parsed.choices.is_empty());
        assert!(parsed.confidence.is_none());
    }
}
