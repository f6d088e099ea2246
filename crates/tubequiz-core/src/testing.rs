//! Scripted completion client shared by the unit tests in this crate.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CompletionError;
use crate::progress::{ProgressReporter, Stage};
use crate::traits::{CompletionClient, CompletionRequest, CompletionResponse, TokenUsage};

/// Replays queued outcomes in call order and records every request.
pub(crate) struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<String, CompletionError>>>,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl ScriptedClient {
    pub(crate) fn new(outcomes: Vec<Result<String, CompletionError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, CompletionError> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Network("script exhausted".into())));

        next.map(|content| CompletionResponse {
            content,
            model: request.model.clone(),
            usage: TokenUsage::default(),
            latency_ms: 0,
        })
    }
}

/// Records stage changes and summarized sections.
#[derive(Default)]
pub(crate) struct RecordingReporter {
    stages: Mutex<Vec<Stage>>,
    sections: Mutex<Vec<(usize, usize)>>,
}

impl RecordingReporter {
    pub(crate) fn stages(&self) -> Vec<Stage> {
        self.stages.lock().unwrap().clone()
    }

    pub(crate) fn sections(&self) -> Vec<(usize, usize)> {
        self.sections.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn on_stage(&self, stage: Stage) {
        self.stages.lock().unwrap().push(stage);
    }

    fn on_section_summarized(&self, section: usize, total: usize) {
        self.sections.lock().unwrap().push((section, total));
    }

    fn on_question_generated(&self, _: usize, _: usize) {}

    fn on_question_failed(&self, _: usize, _: usize, _: &str) {}
}
