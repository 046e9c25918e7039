use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Registry row for a generated quiz, one per quiz id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizRegistryEntry {
    pub quiz_id: String,
    pub title: String,
    pub item_count: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuizRegistryEntry {
    pub fn new(quiz_id: &str, title: &str, item_count: i32) -> Self {
        let now = Utc::now();
        Self {
            quiz_id: quiz_id.to_string(),
            title: title.to_string(),
            item_count,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }
}
