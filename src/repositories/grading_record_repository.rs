use async_trait::async_trait;
use mongodb::Collection;

use crate::{
    db::Database,
    errors::AppResult,
    models::domain::{QuizRecordSummary, WrongAnswerLog},
};

/// Append-only store for grading output: one wrong-answer row per
/// incorrect item and one summary row per submission.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GradingRecordRepository: Send + Sync {
    async fn append_wrong_answers(&self, logs: Vec<WrongAnswerLog>) -> AppResult<()>;
    async fn append_summary(&self, summary: QuizRecordSummary) -> AppResult<()>;
}

pub struct MongoGradingRecordRepository {
    wrong_answers: Collection<WrongAnswerLog>,
    quiz_records: Collection<QuizRecordSummary>,
}

impl MongoGradingRecordRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            wrong_answers: db.get_collection("wrong_answers"),
            quiz_records: db.get_collection("quiz_records"),
        }
    }
}

#[async_trait]
impl GradingRecordRepository for MongoGradingRecordRepository {
    async fn append_wrong_answers(&self, logs: Vec<WrongAnswerLog>) -> AppResult<()> {
        if logs.is_empty() {
            return Ok(());
        }
        self.wrong_answers.insert_many(&logs).await?;
        Ok(())
    }

    async fn append_summary(&self, summary: QuizRecordSummary) -> AppResult<()> {
        self.quiz_records.insert_one(&summary).await?;
        Ok(())
    }
}
