use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Terminal classification of one graded item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum ItemOutcome {
    Correct,
    Incorrect,
    Blank,
}

/// One record per incorrectly answered item. Correct and Blank items do
/// not produce records.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WrongAnswerRecord {
    pub item_id: String,
    pub question_text: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// Computed outcome of grading one submission. `total_seen` counts every
/// submitted item answer; `total_graded` only those with an answer-key
/// entry, and is the denominator for all rates.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct GradingResult {
    pub total_seen: u32,
    pub total_graded: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub blank_count: u32,
    pub wrong_records: Vec<WrongAnswerRecord>,
}

impl GradingResult {
    /// Whole-percent rate, rounded to nearest. 0 when nothing was graded.
    fn rate(&self, count: u32) -> u32 {
        if self.total_graded == 0 {
            return 0;
        }
        ((count as f64 / self.total_graded as f64) * 100.0).round() as u32
    }

    pub fn correct_rate(&self) -> u32 {
        self.rate(self.correct_count)
    }

    pub fn wrong_rate(&self) -> u32 {
        self.rate(self.wrong_count)
    }

    pub fn blank_rate(&self) -> u32 {
        self.rate(self.blank_count)
    }
}

/// Persisted row for one wrong answer, enriched with submission context.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WrongAnswerLog {
    pub quiz_id: String,
    pub quiz_title: String,
    pub respondent_id: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub item_position: i32,
    pub item_id: String,
    pub question_text: String,
    pub student_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

/// Persisted per-submission aggregate row.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizRecordSummary {
    pub quiz_id: String,
    pub quiz_title: String,
    pub graded_at: DateTime<Utc>,
    pub total_graded: i32,
    pub correct_rate: i32,
    pub wrong_rate: i32,
    pub blank_rate: i32,
}
