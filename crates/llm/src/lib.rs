//! Client for the remote summarization provider.
//!
//! [`LlmClient`] talks to an OpenAI-compatible chat-completions endpoint
//! and normalizes every outcome into [`RemoteSummary`] / [`RemoteError`].
//! The provider's wire format never leaves this crate; the orchestration
//! layer consumes only the normalized shapes through the
//! [`RemoteSummarizer`] trait.

mod client;
mod config;

pub use client::{LlmClient, RemoteError, RemoteSummarizer, RemoteSummary};
pub use config::LlmConfig;
