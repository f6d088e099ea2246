//! Core error types.
//!
//! `CompletionError` is defined here rather than in `tubequiz-providers` so
//! the summarizer and quiz generator can classify failures without string
//! matching.

use thiserror::Error;

/// Errors that can occur during a single chat-completion call.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The API returned a 429 rate limit response.
    #[error("rate limited, retry after {retry_after_ms}ms")]
    RateLimited { retry_after_ms: u64 },

    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The response carried no message content.
    #[error("completion response contained no content")]
    EmptyResponse,
}

/// Invalid chunker parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChunkerError {
    #[error("chunk size must be positive")]
    ZeroChunkSize,

    #[error("overlap ({overlap}) must be smaller than chunk size ({chunk_size})")]
    OverlapTooLarge { chunk_size: usize, overlap: usize },
}

/// Errors from the fail-fast summarization pipeline.
#[derive(Debug, Error)]
pub enum SummarizationError {
    /// There was nothing to summarize.
    #[error("transcript is empty")]
    EmptyTranscript,

    /// The configured chunk parameters are invalid.
    #[error("invalid chunking configuration: {0}")]
    Chunking(#[from] ChunkerError),

    /// Summarizing one section failed; no partial summary is returned.
    #[error("summarizing section {section} of {total} failed: {source}")]
    Section {
        section: usize,
        total: usize,
        #[source]
        source: CompletionError,
    },

    /// The final combine call failed.
    #[error("combining section summaries failed: {source}")]
    Combine {
        #[source]
        source: CompletionError,
    },
}
