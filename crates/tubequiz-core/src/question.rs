//! Tolerant parser for model-written quiz questions.
//!
//! The quiz prompt asks for exactly this layout:
//!
//! ```text
//! Q: <question>
//! 1) <option>
//! 2) <option>
//! 3) <option>
//! 4) <option>
//! Correct Answer: <n>
//! ```
//!
//! The model does not always comply, so parsing never fails. Deviations
//! degrade to fixed fallbacks:
//!
//! | input                                     | result                              |
//! |-------------------------------------------|-------------------------------------|
//! | empty block (no lines at all)             | text = `"No question found"`        |
//! | line 0                                    | text, leading `"Q: "` removed       |
//! | option line with `") "`                   | text after the first `") "`         |
//! | option line without `") "`                | empty option, still counted         |
//! | fewer than four option lines              | `Option 1` .. `Option 4`            |
//! | no line 5                                 | correct index `-1`                  |
//! | line 5 not an integer after the prefix    | correct index `-1`                  |
//!
//! Lines are split with [`str::lines`], so a trailing newline does not add
//! an empty final line and `\r\n` endings are stripped. An empty block has
//! no lines rather than one empty line, which is why it gets the placeholder
//! text instead of an empty question. A block that ends in a newline right
//! after its third option therefore has three option lines and falls back
//! to placeholders, not to an empty fourth option.
//!
//! Only the number of option lines is validated; an empty option is kept.
//! The answer number is stored as written, without conversion.

use serde::{Deserialize, Serialize};

const QUESTION_PREFIX: &str = "Q: ";
const ANSWER_PREFIX: &str = "Correct Answer: ";
const OPTION_DELIMITER: &str = ") ";
const MISSING_QUESTION: &str = "No question found";
const FALLBACK_OPTIONS: [&str; 4] = ["Option 1", "Option 2", "Option 3", "Option 4"];

/// Unparsed model output for one quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawQuestionBlock(String);

impl RawQuestionBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RawQuestionBlock {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RawQuestionBlock {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A structured multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    /// Index into `options`, or [`Question::NO_ANSWER`].
    pub correct_option_index: i32,
}

impl Question {
    /// Sentinel for "no valid correct answer could be determined".
    pub const NO_ANSWER: i32 = -1;

    /// The option the answer index points at, if it points at one.
    pub fn correct_option(&self) -> Option<&str> {
        usize::try_from(self.correct_option_index)
            .ok()
            .and_then(|i| self.options.get(i))
            .map(String::as_str)
    }

    pub fn has_answer(&self) -> bool {
        self.correct_option_index != Self::NO_ANSWER
    }
}

/// Which fallbacks fired while parsing a block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseDiagnostics {
    pub missing_question: bool,
    pub placeholder_options: bool,
    /// Option lines that lacked the `") "` delimiter.
    pub empty_options: usize,
    pub missing_answer: bool,
    pub unparseable_answer: bool,
}

impl ParseDiagnostics {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

/// Parse a raw block into a question, applying fallbacks as needed.
pub fn parse_question(block: &RawQuestionBlock) -> Question {
    parse_question_with_diagnostics(block).0
}

/// Like [`parse_question`], also reporting which fallbacks were used.
pub fn parse_question_with_diagnostics(block: &RawQuestionBlock) -> (Question, ParseDiagnostics) {
    let lines: Vec<&str> = block.as_str().lines().collect();
    let mut diag = ParseDiagnostics::default();

    let text = match lines.first() {
        Some(line) => line
            .strip_prefix(QUESTION_PREFIX)
            .unwrap_or(line)
            .trim()
            .to_string(),
        None => {
            diag.missing_question = true;
            MISSING_QUESTION.to_string()
        }
    };

    let collected: Vec<String> = lines
        .iter()
        .skip(1)
        .take(4)
        .map(|line| match line.split_once(OPTION_DELIMITER) {
            Some((_, rest)) => rest.trim().to_string(),
            None => {
                diag.empty_options += 1;
                String::new()
            }
        })
        .collect();

    let options: [String; 4] = match <[String; 4]>::try_from(collected) {
        Ok(options) => options,
        Err(_) => {
            diag.placeholder_options = true;
            diag.empty_options = 0;
            FALLBACK_OPTIONS.map(String::from)
        }
    };

    let correct_option_index = match lines.get(5) {
        Some(line) => {
            let value = line.strip_prefix(ANSWER_PREFIX).unwrap_or(line).trim();
            value.parse::<i32>().unwrap_or_else(|_| {
                diag.unparseable_answer = true;
                Question::NO_ANSWER
            })
        }
        None => {
            diag.missing_answer = true;
            Question::NO_ANSWER
        }
    };

    (
        Question {
            text,
            options,
            correct_option_index,
        },
        diag,
    )
}
