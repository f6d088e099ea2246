//! Mock completion client for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use tubequiz_core::error::CompletionError;
use tubequiz_core::traits::{CompletionClient, CompletionRequest, CompletionResponse, TokenUsage};

/// A completion client that answers from canned responses.
///
/// Rules are checked in insertion order against the user prompt; the first
/// rule whose pattern is a substring wins. Unmatched prompts get the
/// default response.
pub struct MockClient {
    rules: Vec<(String, Outcome)>,
    default_response: String,
    call_count: AtomicU32,
    last_request: Mutex<Option<CompletionRequest>>,
}

enum Outcome {
    Respond(String),
    Fail(u16),
}

impl MockClient {
    /// Create a mock that always returns the same response.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            rules: Vec::new(),
            default_response: response.to_string(),
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        }
    }

    /// Answer prompts containing `pattern` with `response`.
    pub fn respond_to(mut self, pattern: &str, response: &str) -> Self {
        self.rules
            .push((pattern.to_string(), Outcome::Respond(response.to_string())));
        self
    }

    /// Fail prompts containing `pattern` with an HTTP `status` API error.
    pub fn fail_on(mut self, pattern: &str, status: u16) -> Self {
        self.rules.push((pattern.to_string(), Outcome::Fail(status)));
        self
    }

    /// Get the number of calls made to this client.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Get the last request made to this client.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    fn name(&self) -> &str {
        "mock"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(request.clone());

        let outcome = self
            .rules
            .iter()
            .find(|(pattern, _)| request.user_prompt.contains(pattern.as_str()))
            .map(|(_, outcome)| outcome);

        let content = match outcome {
            Some(Outcome::Fail(status)) => {
                return Err(CompletionError::ApiError {
                    status: *status,
                    message: "mock failure".to_string(),
                })
            }
            Some(Outcome::Respond(response)) => response.clone(),
            None => self.default_response.clone(),
        };

        // Rough estimate
        let prompt_tokens = ((request.system_prompt.len() + request.user_prompt.len()) / 4) as u32;
        let completion_tokens = (content.len() / 4) as u32;

        Ok(CompletionResponse {
            content,
            model: request.model.clone(),
            usage: TokenUsage {
                prompt_tokens,
                completion_tokens,
                total_tokens: prompt_tokens + completion_tokens,
            },
            latency_ms: 1,
        })
    }
}
