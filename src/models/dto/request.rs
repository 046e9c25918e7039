use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 200))]
    pub topic: Option<String>,

    /// Non-positive or missing falls back to the default count.
    pub question_count: Option<i16>,

    /// Reference document to restrict generation to, when readable.
    #[validate(url)]
    pub document_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitResponseRequest {
    pub respondent_id: Option<String>,

    /// Defaults to the server clock when the host omits it.
    pub timestamp: Option<DateTime<Utc>>,

    #[validate(length(min = 1, message = "Submission must contain at least one answer"))]
    pub answers: Vec<ItemAnswerInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAnswerInput {
    pub item_id: String,
    pub answer: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaginationParams {
    #[validate(range(min = 0))]
    pub offset: Option<i64>,

    #[validate(range(min = 1, max = 100))]
    pub limit: Option<i64>,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            offset: Some(0),
            limit: Some(20),
        }
    }
}

impl PaginationParams {
    pub fn offset(&self) -> i64 {
        self.offset.unwrap_or(0)
    }

    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(20).min(100)
    }
}
