//! Prompt templates for section summaries, the combine pass and quiz questions.
//!
//! The quiz template fixes the six-line layout that
//! [`crate::question::parse_question`] reads back.

use serde::{Deserialize, Serialize};

/// Marker placed between partial summaries before the combine pass.
pub const SECTION_SEPARATOR: &str = "\n\n=== Next Section ===\n\n";

/// System prompt for quiz generation.
pub const QUIZ_SYSTEM_PROMPT: &str =
    "You are an assistant that generates quiz questions with 4 answer options.";

/// A system / user prompt pair for one completion call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Prompt asking for a concise summary of one transcript section.
///
/// `section_number` is 1-based.
pub fn build_summary_prompt(
    segment_text: &str,
    section_number: usize,
    language_code: &str,
) -> PromptPair {
    PromptPair {
        system: format!(
            "You are an expert content summarizer. Provide a concise summary \
             of section {section_number} in {language_code}. Focus on the main points and key ideas \
             without detailed elaboration."
        ),
        user: format!(
            "Provide a short summary of the following section. \
             Focus on the most important points and key ideas.\n\n\
             Text: {segment_text}"
        ),
    }
}

/// Prompt merging partial summaries into one abstract summary.
pub fn build_combine_prompt(summaries: &[String], language_code: &str) -> PromptPair {
    let combined = summaries.join(SECTION_SEPARATOR);
    PromptPair {
        system: format!(
            "You are an expert in creating concise summaries. \
             Create a short, abstract summary in {language_code} from the \
             provided intermediate summaries. Focus on key ideas and main points."
        ),
        user: format!(
            "Create a brief, abstract summary from the following \
             intermediate summaries. The summary should:\n\
             - Focus on the most important points\n\
             - Keep it short and concise\n\
             - Maintain clarity and coherence\n\n\
             Intermediate summaries:\n{combined}"
        ),
    }
}

/// Prompt asking for one multiple-choice question about `part_text`.
pub fn build_quiz_prompt(part_text: &str) -> PromptPair {
    PromptPair {
        system: QUIZ_SYSTEM_PROMPT.to_string(),
        user: format!(
            "Create a multiple-choice question with 4 answer options based on the following text. \
             Provide the correct answer and the incorrect options clearly. \
             Format the question and options as follows:\n\
             Q: [Question Text]\n\
             1) Option 1\n\
             2) Option 2\n\
             3) Option 3\n\
             4) Option 4\n\
             Correct Answer: Option Number\n\n\n\
             Text: {part_text}"
        ),
    }
}
