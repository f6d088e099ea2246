//! Quiz sessions saved with `quiz --output`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use tubequiz_core::grader::QuizScore;
use tubequiz_core::question::Question;
use tubequiz_core::video::VideoId;

/// What the quiz questions were generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuizSource {
    Summary,
    Transcript,
    TextFile { path: PathBuf },
}

/// One quiz run: the questions, the user's picks and the result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSession {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub video_id: Option<VideoId>,
    pub source: QuizSource,
    /// Summary the questions came from, when there was one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    pub questions: Vec<Question>,
    /// Selected option text per answered question.
    pub selections: Vec<String>,
    pub score: QuizScore,
}

impl QuizSession {
    pub fn new(
        video_id: Option<VideoId>,
        source: QuizSource,
        summary: Option<String>,
        questions: Vec<Question>,
        selections: Vec<String>,
        score: QuizScore,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            video_id,
            source,
            summary,
            questions,
            selections,
            score,
        }
    }

    /// Write the session as pretty JSON under `dir`, returning the file path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create output directory: {}", dir.display()))?;

        let subject = self
            .video_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_else(|| "text".to_string());
        let timestamp = self.created_at.format("%Y-%m-%dT%H%M%S");
        let path = dir.join(format!("quiz-{subject}-{timestamp}.json"));

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write session: {}", path.display()))?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tubequiz_core::grader::grade;
    use tubequiz_core::question::{parse_question, RawQuestionBlock};
    use tubequiz_core::video::extract_video_id;

    fn questions() -> Vec<Question> {
        vec![parse_question(&RawQuestionBlock::new(
            "Q: What is 2+2?\n1) 3\n2) 4\n3) 5\n4) 6\nCorrect Answer: 1",
        ))]
    }

    #[test]
    fn saves_json_named_after_video() {
        let dir = tempfile::tempdir().unwrap();
        let questions = questions();
        let selections = vec!["4".to_string()];
        let score = grade(&questions, &selections);
        let session = QuizSession::new(
            Some(extract_video_id("dQw4w9WgXcQ").unwrap()),
            QuizSource::Summary,
            Some("A summary.".into()),
            questions,
            selections,
            score,
        );

        let path = session.save(&dir.path().join("out")).unwrap();
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("quiz-dQw4w9WgXcQ-"));
        assert!(name.ends_with(".json"));

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["video_id"], "dQw4w9WgXcQ");
        assert_eq!(value["source"]["kind"], "summary");
        assert_eq!(value["score"]["score"], 1);
        assert_eq!(value["questions"][0]["correct_option_index"], 1);
    }

    #[test]
    fn text_file_session_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let session = QuizSession::new(
            None,
            QuizSource::TextFile {
                path: PathBuf::from("notes.txt"),
            },
            None,
            Vec::new(),
            Vec::new(),
            grade::<String>(&[], &[]),
        );

        let path = session.save(dir.path()).unwrap();
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("quiz-text-"));

        let loaded: QuizSession =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.id, session.id);
        assert_eq!(loaded.source, session.source);
        assert!(loaded.summary.is_none());
    }
}
