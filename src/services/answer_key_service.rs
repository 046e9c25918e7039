use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use uuid::Uuid;

use crate::constants::prompts::EMAIL_QUESTION_PATTERN;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{AnswerKey, AnswerKeyEntry, FormChoice, FormItem, GeneratedQuestion};

static EMAIL_QUESTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(EMAIL_QUESTION_PATTERN).expect("EMAIL_QUESTION_PATTERN is a valid regex pattern")
});

/// Content policy: questions asking the respondent for their email are
/// dropped before the answer key is built. Kept as a named predicate so it
/// can be tested and swapped independently of generation.
pub fn is_email_collection_question(question_text: &str) -> bool {
    EMAIL_QUESTION_REGEX.is_match(question_text)
}

/// Issues the opaque item identifiers the form host would assign. The
/// core only records the association, never interprets the ids.
pub trait ItemIdAssigner: Send + Sync {
    fn next_item_id(&self) -> String;
}

/// Stand-in assigner for hosts that accept caller-chosen ids.
pub struct UuidItemIdAssigner;

impl ItemIdAssigner for UuidItemIdAssigner {
    fn next_item_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Builds the answer key and rendered form items for one quiz.
///
/// Questions matching the email policy are filtered out; survivors keep
/// their original order and get a 1-based numbered display title. The
/// returned entries are in 1:1 correspondence with the returned items.
pub fn build_answer_key(
    quiz_id: &str,
    questions: &[GeneratedQuestion],
    assigner: &dyn ItemIdAssigner,
) -> AppResult<(AnswerKey, Vec<FormItem>)> {
    let mut entries = Vec::new();
    let mut items = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();

    let kept = questions
        .iter()
        .filter(|q| !is_email_collection_question(&q.question));

    for (index, question) in kept.enumerate() {
        question.validate()?;

        let correct_answer = question.correct_answer().ok_or_else(|| {
            AppError::ValidationError(format!(
                "Question '{}' has no option at its answerIndex",
                question.question
            ))
        })?;

        let item_id = assigner.next_item_id();
        if !seen_ids.insert(item_id.clone()) {
            return Err(AppError::InternalError(format!(
                "Item id assigner issued duplicate id '{}'",
                item_id
            )));
        }

        let display_text = format!("{}. {}", index + 1, question.question);

        let (feedback_correct, feedback_incorrect) = match &question.explanation {
            Some(explanation) if !explanation.is_empty() => (
                Some(format!("✔ 正確！\n{}", explanation)),
                Some(format!("✘ 錯誤：\n{}", explanation)),
            ),
            _ => (None, None),
        };

        items.push(FormItem {
            item_id: item_id.clone(),
            title: display_text.clone(),
            choices: question
                .options
                .iter()
                .enumerate()
                .map(|(i, text)| FormChoice {
                    text: text.clone(),
                    correct: i == question.answer_index,
                })
                .collect(),
            points: question.points,
            feedback_correct,
            feedback_incorrect,
        });

        entries.push(AnswerKeyEntry {
            item_id,
            question_text: display_text,
            correct_answer_text: correct_answer.to_string(),
            explanation: question.explanation.clone().unwrap_or_default(),
        });
    }

    Ok((AnswerKey::new(quiz_id, entries), items))
}
