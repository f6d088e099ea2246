//! Two-pass transcript summarizer.
//!
//! Each chunk of the transcript is summarized on its own, then the partial
//! summaries are merged by one more completion call. Any failed call aborts
//! the whole run; no partial summary is ever returned.

use std::sync::Arc;

use tracing::instrument;

use crate::chunker;
use crate::error::SummarizationError;
use crate::progress::{ProgressReporter, Stage};
use crate::prompts::{build_combine_prompt, build_summary_prompt};
use crate::traits::{CompletionClient, CompletionRequest};

/// Default model used for summaries.
pub const DEFAULT_SUMMARY_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration for the summarizer.
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Maximum characters per transcript chunk.
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks.
    pub chunk_overlap: usize,
    /// Temperature for every call.
    pub temperature: f64,
    /// Max tokens for every call.
    pub max_tokens: u32,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: 7000,
            chunk_overlap: 1000,
            temperature: 0.7,
            max_tokens: 400,
        }
    }
}

/// Summarizes transcripts through an injected completion client.
pub struct Summarizer {
    client: Arc<dyn CompletionClient>,
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(client: Arc<dyn CompletionClient>, config: SummarizerConfig) -> Self {
        Self { client, config }
    }

    /// Produce one short abstract summary of `transcript` in `language_code`.
    #[instrument(skip(self, transcript, progress), fields(chars = transcript.len()))]
    pub async fn summarize(
        &self,
        transcript: &str,
        language_code: &str,
        model: &str,
        progress: &dyn ProgressReporter,
    ) -> Result<String, SummarizationError> {
        if transcript.trim().is_empty() {
            return Err(SummarizationError::EmptyTranscript);
        }

        let segments = chunker::split(
            transcript,
            self.config.chunk_size,
            self.config.chunk_overlap,
        )?;
        let total = segments.len();
        tracing::info!(sections = total, "summarizing transcript");
        progress.on_stage(Stage::Summarizing);

        let mut partials = Vec::with_capacity(total);
        for segment in &segments {
            let section = segment.index + 1;
            let prompt = build_summary_prompt(&segment.content, section, language_code);
            let request = CompletionRequest::from_prompt(
                model,
                prompt,
                self.config.temperature,
                self.config.max_tokens,
            );

            let response = self.client.complete(&request).await.map_err(|source| {
                tracing::error!(section, error = %source, "section summary failed");
                SummarizationError::Section {
                    section,
                    total,
                    source,
                }
            })?;

            partials.push(response.content);
            progress.on_section_summarized(section, total);
        }

        progress.on_stage(Stage::Combining);
        let request = CompletionRequest::from_prompt(
            model,
            build_combine_prompt(&partials, language_code),
            self.config.temperature,
            self.config.max_tokens,
        );
        let response = self.client.complete(&request).await.map_err(|source| {
            tracing::error!(error = %source, "combine pass failed");
            SummarizationError::Combine { source }
        })?;

        Ok(response.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompletionError;
    use crate::progress::NoopReporter;
    use crate::prompts::SECTION_SEPARATOR;
    use crate::testing::{RecordingReporter, ScriptedClient};

    fn small_config() -> SummarizerConfig {
        SummarizerConfig {
            chunk_size: 40,
            chunk_overlap: 5,
            ..Default::default()
        }
    }

    fn two_section_transcript() -> String {
        // 60 chars: splits into exactly two segments at chunk_size 40
        format!("{} {}", "a".repeat(30), "b".repeat(29))
    }

    #[test]
    fn default_config_values() {
        let config = SummarizerConfig::default();
        assert_eq!(config.chunk_size, 7000);
        assert_eq!(config.chunk_overlap, 1000);
        assert_eq!(config.max_tokens, 400);
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn single_section_makes_two_calls() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("partial".into()),
            Ok("final summary".into()),
        ]));
        let summarizer = Summarizer::new(client.clone(), SummarizerConfig::default());

        let summary = summarizer
            .summarize("A short transcript.", "en", "m", &NoopReporter)
            .await
            .unwrap();
        assert_eq!(summary, "final summary");

        let requests = client.requests();
        assert_eq!(requests.len(), 2);
        assert!(requests[0].system_prompt.contains("section 1 in en"));
        assert!(requests[1].user_prompt.contains("partial"));
        assert_eq!(requests[0].max_tokens, 400);
    }

    #[tokio::test]
    async fn reports_stages_but_leaves_done_to_caller() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("one".into()),
            Ok("two".into()),
            Ok("combined".into()),
        ]));
        let summarizer = Summarizer::new(client, small_config());
        let reporter = RecordingReporter::default();

        summarizer
            .summarize(&two_section_transcript(), "en", "m", &reporter)
            .await
            .unwrap();

        assert_eq!(reporter.stages(), vec![Stage::Summarizing, Stage::Combining]);
        assert_eq!(reporter.sections(), vec![(1, 2), (2, 2)]);
    }

    #[tokio::test]
    async fn partial_summaries_joined_in_order() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("one".into()),
            Ok("two".into()),
            Ok("combined".into()),
        ]));
        let summarizer = Summarizer::new(client.clone(), small_config());

        let summary = summarizer
            .summarize(&two_section_transcript(), "fr", "m", &NoopReporter)
            .await
            .unwrap();
        assert_eq!(summary, "combined");

        let requests = client.requests();
        assert_eq!(requests.len(), 3);
        assert!(requests[1].system_prompt.contains("section 2 in fr"));
        assert!(requests[2]
            .user_prompt
            .contains(&format!("one{SECTION_SEPARATOR}two")));
    }

    #[tokio::test]
    async fn second_section_failure_aborts() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("one".into()),
            Err(CompletionError::RateLimited {
                retry_after_ms: 5000,
            }),
            Ok("never used".into()),
        ]));
        let summarizer = Summarizer::new(client.clone(), small_config());

        let err = summarizer
            .summarize(&two_section_transcript(), "en", "m", &NoopReporter)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            SummarizationError::Section {
                section: 2,
                total: 2,
                ..
            }
        ));
        // no combine call after the failure
        assert_eq!(client.requests().len(), 2);
    }

    #[tokio::test]
    async fn combine_failure_is_reported() {
        let client = Arc::new(ScriptedClient::new(vec![
            Ok("one".into()),
            Err(CompletionError::Timeout(120)),
        ]));
        let summarizer = Summarizer::new(client, SummarizerConfig::default());

        let err = summarizer
            .summarize("text", "en", "m", &NoopReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::Combine { .. }));
    }

    #[tokio::test]
    async fn empty_transcript_makes_no_calls() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let summarizer = Summarizer::new(client.clone(), SummarizerConfig::default());

        let err = summarizer
            .summarize("   \n", "en", "m", &NoopReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::EmptyTranscript));
        assert!(client.requests().is_empty());
    }

    #[tokio::test]
    async fn invalid_chunking_is_an_error() {
        let client = Arc::new(ScriptedClient::new(vec![]));
        let config = SummarizerConfig {
            chunk_size: 10,
            chunk_overlap: 10,
            ..Default::default()
        };
        let summarizer = Summarizer::new(client, config);

        let err = summarizer
            .summarize("text", "en", "m", &NoopReporter)
            .await
            .unwrap_err();
        assert!(matches!(err, SummarizationError::Chunking(_)));
    }
}
