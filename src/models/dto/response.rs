use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{FormItem, GradingResult, WrongAnswerRecord};

#[derive(Debug, Clone, Serialize)]
pub struct QuizCreatedResponse {
    pub quiz_id: String,
    pub title: String,
    pub total_questions: usize,
    pub updated_at: DateTime<Utc>,
    pub items: Vec<FormItem>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GradingResponse {
    pub quiz_id: String,
    pub total_seen: u32,
    pub total_graded: u32,
    pub correct_count: u32,
    pub wrong_count: u32,
    pub blank_count: u32,
    pub correct_rate: u32,
    pub wrong_rate: u32,
    pub blank_rate: u32,
    pub wrong_records: Vec<WrongAnswerRecord>,
}

impl GradingResponse {
    pub fn from_result(quiz_id: &str, result: GradingResult) -> Self {
        GradingResponse {
            quiz_id: quiz_id.to_string(),
            total_seen: result.total_seen,
            total_graded: result.total_graded,
            correct_count: result.correct_count,
            wrong_count: result.wrong_count,
            blank_count: result.blank_count,
            correct_rate: result.correct_rate(),
            wrong_rate: result.wrong_rate(),
            blank_rate: result.blank_rate(),
            wrong_records: result.wrong_records,
        }
    }
}
