//! Quiz generation: one completion call per line of source text.
//!
//! Unlike the summarizer, a failed call only loses its own question; the
//! remaining parts are still processed.

use std::sync::Arc;

use tracing::instrument;

use crate::progress::{ProgressReporter, Stage};
use crate::prompts::build_quiz_prompt;
use crate::question::{parse_question_with_diagnostics, Question, RawQuestionBlock};
use crate::traits::{CompletionClient, CompletionRequest};

/// Default model used for quiz questions.
pub const DEFAULT_QUIZ_MODEL: &str = "llama-3.1-8b-instant";

/// Configuration for the quiz generator.
#[derive(Debug, Clone)]
pub struct QuizConfig {
    /// Model for every question call.
    pub model: String,
    /// Temperature for generation.
    pub temperature: f64,
    /// Max tokens per question.
    pub max_tokens: u32,
    /// Skip parts that are empty after trimming instead of prompting on them.
    pub skip_blank_parts: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_QUIZ_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 250,
            skip_blank_parts: true,
        }
    }
}

/// Generates raw question blocks through an injected completion client.
pub struct QuizGenerator {
    client: Arc<dyn CompletionClient>,
    config: QuizConfig,
}

impl QuizGenerator {
    pub fn new(client: Arc<dyn CompletionClient>, config: QuizConfig) -> Self {
        Self { client, config }
    }

    /// Ask for one question per line of `text`, using at most the first
    /// `num_questions` lines. Never returns more than `num_questions` blocks.
    #[instrument(skip(self, text, progress), fields(model = %self.config.model))]
    pub async fn generate_quiz(
        &self,
        text: &str,
        num_questions: usize,
        progress: &dyn ProgressReporter,
    ) -> Vec<RawQuestionBlock> {
        progress.on_stage(Stage::GeneratingQuiz);

        let parts: Vec<&str> = text.split('\n').take(num_questions).collect();
        let total = parts.len();
        let mut blocks = Vec::with_capacity(total);

        for (i, part) in parts.into_iter().enumerate() {
            let part_number = i + 1;
            if self.config.skip_blank_parts && part.trim().is_empty() {
                tracing::debug!(part = part_number, "skipping blank part");
                continue;
            }

            let request = CompletionRequest::from_prompt(
                self.config.model.as_str(),
                build_quiz_prompt(part),
                self.config.temperature,
                self.config.max_tokens,
            );

            match self.client.complete(&request).await {
                Ok(response) => {
                    blocks.push(RawQuestionBlock::new(response.content.trim()));
                    progress.on_question_generated(part_number, total);
                }
                Err(e) => {
                    tracing::warn!(part = part_number, error = %e, "question generation failed, skipping");
                    progress.on_question_failed(part_number, total, &e.to_string());
                }
            }
        }

        blocks
    }

    /// Generate and parse in one step.
    pub async fn generate_questions(
        &self,
        text: &str,
        num_questions: usize,
        progress: &dyn ProgressReporter,
    ) -> Vec<Question> {
        self.generate_quiz(text, num_questions, progress)
            .await
            .iter()
            .enumerate()
            .map(|(i, block)| {
                let (question, diag) = parse_question_with_diagnostics(block);
                if !diag.is_clean() {
                    tracing::debug!(question = i + 1, ?diag, "question parsed with fallbacks");
                }
                question
            })
            .collect()
    }
}
