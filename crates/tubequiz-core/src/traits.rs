//! The completion client trait and its request / response types.
//!
//! `tubequiz-providers` implements [`CompletionClient`] for OpenAI-compatible
//! HTTP endpoints and for tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::CompletionError;
use crate::prompts::PromptPair;

/// A chat-completion backend: one system + user prompt in, one text out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Human-readable client name (e.g. "openai").
    fn name(&self) -> &str;

    /// Issue exactly one completion call. No retries.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError>;
}

/// A single chat-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// Model identifier (e.g. "llama-3.1-8b-instant").
    pub model: String,
    /// System instruction.
    pub system_prompt: String,
    /// User instruction.
    pub user_prompt: String,
    /// Sampling temperature.
    pub temperature: f64,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
}

impl CompletionRequest {
    pub fn from_prompt(
        model: impl Into<String>,
        prompt: PromptPair,
        temperature: f64,
        max_tokens: u32,
    ) -> Self {
        Self {
            model: model.into(),
            system_prompt: prompt.system,
            user_prompt: prompt.user,
            temperature,
            max_tokens,
        }
    }
}

/// Response from a completion call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// The raw message content.
    pub content: String,
    /// Model that actually produced the response.
    pub model: String,
    /// Token usage.
    #[serde(default)]
    pub usage: TokenUsage,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

/// Token accounting reported by the API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_from_prompt_pair() {
        let prompt = PromptPair {
            system: "sys".into(),
            user: "usr".into(),
        };
        let req = CompletionRequest::from_prompt("m", prompt, 0.7, 400);
        assert_eq!(req.model, "m");
        assert_eq!(req.system_prompt, "sys");
        assert_eq!(req.user_prompt, "usr");
        assert_eq!(req.max_tokens, 400);
    }
}
