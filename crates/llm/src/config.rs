//! Provider configuration loaded from environment variables.

use std::time::Duration;

/// Default chat-completions endpoint base.
const DEFAULT_BASE_URL: &str = "https://api.openai.com";
/// Default model identifier.
const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default per-request timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Configuration for the remote summarization provider.
///
/// A missing `api_key` marks the client as not configured; no request is
/// ever attempted in that state.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base HTTP URL of the provider, without a trailing slash.
    pub base_url: String,
    /// Credential for the provider. `None` means unconfigured.
    pub api_key: Option<String>,
    /// Model identifier sent with each request.
    pub model: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl LlmConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var          | Default                   |
    /// |------------------|---------------------------|
    /// | `LLM_BASE_URL`   | `https://api.openai.com`  |
    /// | `LLM_API_KEY`    | unset (not configured)    |
    /// | `LLM_MODEL`      | `gpt-4o-mini`             |
    /// | `LLM_TIMEOUT_MS` | `10000`                   |
    pub fn from_env() -> Self {
        let base_url = std::env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());

        let api_key = std::env::var("LLM_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let model = std::env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into());

        let timeout_ms: u64 = std::env::var("LLM_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .expect("LLM_TIMEOUT_MS must be a valid u64");

        Self {
            base_url,
            api_key,
            model,
            timeout_ms,
        }
    }

    /// Per-request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
