use std::sync::Arc;

use chrono::Utc;

use crate::constants::prompts::SKIP_SENTINEL;
use crate::errors::{AppError, AppResult};
use crate::models::domain::{
    AnswerKey, GradingResult, ItemOutcome, QuizRecordSummary, SubmissionResponse, WrongAnswerLog,
    WrongAnswerRecord,
};
use crate::repositories::{AnswerKeyRepository, GradingRecordRepository, QuizRegistryRepository};

/// Classify one submitted answer against the stored correct answer.
///
/// The skip sentinel is Blank even when it equals the correct answer text.
/// Comparison is exact: case- and whitespace-sensitive as authored, with
/// no normalization of what the endpoint generated or the host echoed.
pub fn classify(answer: &str, correct_answer: &str) -> ItemOutcome {
    if answer.is_empty() || answer == SKIP_SENTINEL {
        ItemOutcome::Blank
    } else if answer == correct_answer {
        ItemOutcome::Correct
    } else {
        ItemOutcome::Incorrect
    }
}

/// Grade one submission against an answer key. Pure; persistence of the
/// emitted records is the caller's concern.
///
/// Items without a key entry (non-MCQ items, or items created after the
/// key was last regenerated) are skipped: counted by `total_seen` but
/// excluded from `total_graded` and every rate.
pub fn grade(answer_key: &AnswerKey, submission: &SubmissionResponse) -> GradingResult {
    let mut result = GradingResult::default();

    for item in &submission.item_answers {
        result.total_seen += 1;

        let Some(entry) = answer_key.lookup(&item.item_id) else {
            continue;
        };
        result.total_graded += 1;

        match classify(&item.answer, &entry.correct_answer_text) {
            ItemOutcome::Blank => result.blank_count += 1,
            ItemOutcome::Correct => result.correct_count += 1,
            ItemOutcome::Incorrect => {
                result.wrong_count += 1;
                result.wrong_records.push(WrongAnswerRecord {
                    item_id: entry.item_id.clone(),
                    question_text: entry.question_text.clone(),
                    student_answer: item.answer.clone(),
                    correct_answer: entry.correct_answer_text.clone(),
                    explanation: entry.explanation.clone(),
                });
            }
        }
    }

    result
}

pub struct GradingService {
    answer_keys: Arc<dyn AnswerKeyRepository>,
    records: Arc<dyn GradingRecordRepository>,
    registry: Arc<dyn QuizRegistryRepository>,
}

impl GradingService {
    pub fn new(
        answer_keys: Arc<dyn AnswerKeyRepository>,
        records: Arc<dyn GradingRecordRepository>,
        registry: Arc<dyn QuizRegistryRepository>,
    ) -> Self {
        Self {
            answer_keys,
            records,
            registry,
        }
    }

    /// Grade a submission against the stored key, then persist one
    /// wrong-answer row per incorrect item and one summary row.
    pub async fn grade_submission(
        &self,
        submission: &SubmissionResponse,
    ) -> AppResult<GradingResult> {
        let answer_key = self
            .answer_keys
            .find_by_quiz_id(&submission.quiz_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Answer key for quiz '{}' not found",
                    submission.quiz_id
                ))
            })?;

        let result = grade(&answer_key, submission);

        let quiz_title = self
            .registry
            .find_by_quiz_id(&submission.quiz_id)
            .await?
            .map(|entry| entry.title)
            .unwrap_or_else(|| submission.quiz_id.clone());

        let logs = wrong_answer_logs(submission, &quiz_title, &result.wrong_records);
        self.records.append_wrong_answers(logs).await?;

        self.records
            .append_summary(QuizRecordSummary {
                quiz_id: submission.quiz_id.clone(),
                quiz_title,
                graded_at: Utc::now(),
                total_graded: result.total_graded as i32,
                correct_rate: result.correct_rate() as i32,
                wrong_rate: result.wrong_rate() as i32,
                blank_rate: result.blank_rate() as i32,
            })
            .await?;

        log::info!(
            "Graded submission for quiz '{}': {} graded, {} correct, {} wrong, {} blank",
            submission.quiz_id,
            result.total_graded,
            result.correct_count,
            result.wrong_count,
            result.blank_count
        );

        Ok(result)
    }
}

/// Enrich wrong-answer records with submission context for storage. Item
/// position is the 1-based position within the submitted answers.
fn wrong_answer_logs(
    submission: &SubmissionResponse,
    quiz_title: &str,
    wrong_records: &[WrongAnswerRecord],
) -> Vec<WrongAnswerLog> {
    wrong_records
        .iter()
        .map(|record| {
            let position = submission
                .item_answers
                .iter()
                .position(|a| a.item_id == record.item_id)
                .map(|i| i + 1)
                .unwrap_or(0);

            WrongAnswerLog {
                quiz_id: submission.quiz_id.clone(),
                quiz_title: quiz_title.to_string(),
                respondent_id: submission.respondent_id.clone(),
                submitted_at: submission.timestamp,
                item_position: position as i32,
                item_id: record.item_id.clone(),
                question_text: record.question_text.clone(),
                student_answer: record.student_answer.clone(),
                correct_answer: record.correct_answer.clone(),
                explanation: record.explanation.clone(),
            }
        })
        .collect()
}
