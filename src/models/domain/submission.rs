use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One respondent's submission, item answers in the order the form host
/// delivered them. An empty answer string means the item was left blank.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubmissionResponse {
    pub quiz_id: String,
    pub respondent_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub item_answers: Vec<ItemAnswer>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ItemAnswer {
    pub item_id: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_serialization_preserves_answer_order() {
        let submission = SubmissionResponse {
            quiz_id: "quiz-1".to_string(),
            respondent_id: Some("student@example.com".to_string()),
            timestamp: Utc::now(),
            item_answers: vec![
                ItemAnswer {
                    item_id: "item-b".to_string(),
                    answer: "乙".to_string(),
                },
                ItemAnswer {
                    item_id: "item-a".to_string(),
                    answer: String::new(),
                },
            ],
        };

        let json = serde_json::to_string(&submission).expect("should serialize");
        let parsed: SubmissionResponse = serde_json::from_str(&json).expect("should deserialize");

        assert_eq!(parsed.item_answers[0].item_id, "item-b");
        assert_eq!(parsed.item_answers[1].answer, "");
    }
}
