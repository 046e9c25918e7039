use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One graded item: what was asked, the exact text of the correct option,
/// and the explanation shown after grading. Read-only once stored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerKeyEntry {
    pub item_id: String,
    pub question_text: String,
    pub correct_answer_text: String,
    pub explanation: String,
}

/// The persisted answer key for one quiz. Entries keep the original item
/// order; the whole document is replaced on regeneration, never merged.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AnswerKey {
    pub quiz_id: String,
    pub entries: Vec<AnswerKeyEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl AnswerKey {
    pub fn new(quiz_id: &str, entries: Vec<AnswerKeyEntry>) -> Self {
        Self {
            quiz_id: quiz_id.to_string(),
            entries,
            generated_at: Some(Utc::now()),
        }
    }

    pub fn lookup(&self, item_id: &str) -> Option<&AnswerKeyEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key() -> AnswerKey {
        AnswerKey::new(
            "quiz-1",
            vec![
                AnswerKeyEntry {
                    item_id: "item-a".to_string(),
                    question_text: "1. 第一題".to_string(),
                    correct_answer_text: "甲".to_string(),
                    explanation: "解析一".to_string(),
                },
                AnswerKeyEntry {
                    item_id: "item-b".to_string(),
                    question_text: "2. 第二題".to_string(),
                    correct_answer_text: "乙".to_string(),
                    explanation: String::new(),
                },
            ],
        )
    }

    #[test]
    fn lookup_finds_entry_by_item_id() {
        let key = make_key();
        let entry = key.lookup("item-b").expect("entry should exist");
        assert_eq!(entry.correct_answer_text, "乙");
    }

    #[test]
    fn lookup_misses_unknown_item_id() {
        let key = make_key();
        assert!(key.lookup("item-zzz").is_none());
    }

    #[test]
    fn entries_preserve_insertion_order() {
        let key = make_key();
        assert_eq!(key.len(), 2);
        assert_eq!(key.entries[0].item_id, "item-a");
        assert_eq!(key.entries[1].item_id, "item-b");
    }

    #[test]
    fn round_trip_serialization_preserves_entries() {
        let key = make_key();
        let json = serde_json::to_string(&key).expect("key should serialize");
        let parsed: AnswerKey = serde_json::from_str(&json).expect("key should deserialize");

        assert_eq!(parsed.quiz_id, "quiz-1");
        assert_eq!(parsed.entries, key.entries);
    }
}
