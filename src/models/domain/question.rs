use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

fn default_points() -> i16 {
    1
}

/// A single multiple-choice question as returned by the generation
/// endpoint. Field names follow the wire contract the prompt dictates.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer_index: usize,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default = "default_points")]
    pub points: i16,
}

impl GeneratedQuestion {
    pub const OPTION_COUNT: usize = 4;

    /// Field-level checks applied before any answer-key work. The JSON may
    /// parse and still describe an ungradeable question.
    pub fn validate(&self) -> AppResult<()> {
        if self.question.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Question text cannot be empty".to_string(),
            ));
        }
        if self.options.len() != Self::OPTION_COUNT {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has {} options, expected {}",
                self.question,
                self.options.len(),
                Self::OPTION_COUNT
            )));
        }
        if self.answer_index >= self.options.len() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has answerIndex {} out of range",
                self.question, self.answer_index
            )));
        }
        if self.points < 1 {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has non-positive points",
                self.question
            )));
        }
        Ok(())
    }

    /// The literal text of the designated correct option, if in range.
    pub fn correct_answer(&self) -> Option<&str> {
        self.options.get(self.answer_index).map(String::as_str)
    }
}
