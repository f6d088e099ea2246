//! Progress reporting for the summarize and quiz pipelines.

use std::fmt;

/// Coarse pipeline stages shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    FetchingTranscript,
    Summarizing,
    Combining,
    GeneratingQuiz,
    Done,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::FetchingTranscript => write!(f, "Fetching video transcript"),
            Stage::Summarizing => write!(f, "Summarizing sections"),
            Stage::Combining => write!(f, "Combining section summaries"),
            Stage::GeneratingQuiz => write!(f, "Generating quiz questions"),
            Stage::Done => write!(f, "Done"),
        }
    }
}

/// Progress reporting trait.
pub trait ProgressReporter: Send + Sync {
    fn on_stage(&self, stage: Stage);
    fn on_section_summarized(&self, section: usize, total: usize);
    fn on_question_generated(&self, part: usize, total: usize);
    fn on_question_failed(&self, part: usize, total: usize, error: &str);
}

/// No-op progress reporter.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn on_stage(&self, _: Stage) {}
    fn on_section_summarized(&self, _: usize, _: usize) {}
    fn on_question_generated(&self, _: usize, _: usize) {}
    fn on_question_failed(&self, _: usize, _: usize, _: &str) {}
}
