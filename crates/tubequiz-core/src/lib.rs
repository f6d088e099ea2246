//! tubequiz-core: Chunking, prompting, summarization and quiz parsing.
//!
//! This crate holds the text pipeline that turns a video transcript into a
//! summary and a graded multiple-choice quiz. Network access lives behind
//! the [`traits::CompletionClient`] and [`transcript::TranscriptSource`]
//! traits, which `tubequiz-providers` implements.

pub mod chunker;
pub mod error;
pub mod grader;
pub mod progress;
pub mod prompts;
pub mod question;
pub mod quiz;
pub mod summarizer;
#[cfg(test)]
mod testing;
pub mod traits;
pub mod transcript;
pub mod video;

pub use error::{ChunkerError, CompletionError, SummarizationError};
pub use question::{parse_question, Question, RawQuestionBlock};
pub use traits::{CompletionClient, CompletionRequest, CompletionResponse};
