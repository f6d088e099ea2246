//! Quiz grading.

use serde::{Deserialize, Serialize};

use crate::question::Question;

/// Outcome for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradedAnswer {
    /// The option text the user picked, if they answered.
    pub selected: Option<String>,
    /// The option the answer key points at, if it points at one.
    pub correct: Option<String>,
    pub is_correct: bool,
}

/// Score for a whole quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizScore {
    pub answers: Vec<GradedAnswer>,
    pub score: usize,
    pub total: usize,
}

impl QuizScore {
    /// Fraction of questions answered correctly, 0.0 for an empty quiz.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.score as f64 / self.total as f64
    }
}

/// Compare each selected option string against its question's answer key.
///
/// A question whose index is the sentinel, or out of range, never scores.
/// Selections beyond the number of questions are ignored; missing ones
/// count as unanswered.
pub fn grade<S: AsRef<str>>(questions: &[Question], selections: &[S]) -> QuizScore {
    let answers: Vec<GradedAnswer> = questions
        .iter()
        .enumerate()
        .map(|(i, question)| {
            let selected = selections.get(i).map(|s| s.as_ref());
            let correct = if question.has_answer() {
                question.correct_option()
            } else {
                None
            };
            let is_correct = matches!((selected, correct), (Some(s), Some(c)) if s == c);

            GradedAnswer {
                selected: selected.map(str::to_string),
                correct: correct.map(str::to_string),
                is_correct,
            }
        })
        .collect();

    let score = answers.iter().filter(|a| a.is_correct).count();
    QuizScore {
        score,
        total: questions.len(),
        answers,
    }
}
