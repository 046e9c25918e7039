use crate::models::domain::GeneratedQuestion;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a well-formed four-option question
    pub fn test_question(text: &str, answer_index: usize) -> GeneratedQuestion {
        GeneratedQuestion {
            question: text.to_string(),
            options: vec![
                "甲".to_string(),
                "乙".to_string(),
                "丙".to_string(),
                "丁".to_string(),
            ],
            answer_index,
            explanation: Some("解析".to_string()),
            points: 1,
        }
    }

    /// Creates a batch of numbered questions for answer-key tests
    pub fn test_questions(count: usize) -> Vec<GeneratedQuestion> {
        (0..count)
            .map(|i| test_question(&format!("第{}題", i + 1), i % 4))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_test_question() {
        let question = test_question("測試題", 2);
        assert_eq!(question.options.len(), 4);
        assert_eq!(question.correct_answer(), Some("丙"));
        assert!(question.validate().is_ok());
    }

    #[test]
    fn test_fixtures_test_questions() {
        let questions = test_questions(3);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].question, "第1題");
        assert_eq!(questions[2].question, "第3題");
    }
}
