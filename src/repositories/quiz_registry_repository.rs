use async_trait::async_trait;
use mongodb::{bson::doc, Collection};

use crate::{db::Database, errors::AppResult, models::domain::QuizRegistryEntry};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRegistryRepository: Send + Sync {
    async fn find_by_quiz_id(&self, quiz_id: &str) -> AppResult<Option<QuizRegistryEntry>>;
    async fn upsert(&self, entry: QuizRegistryEntry) -> AppResult<QuizRegistryEntry>;
    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRegistryEntry>, i64)>;
}

pub struct MongoQuizRegistryRepository {
    collection: Collection<QuizRegistryEntry>,
}

impl MongoQuizRegistryRepository {
    pub fn new(db: &Database) -> Self {
        let collection = db.get_collection("quiz_registry");
        Self { collection }
    }
}

#[async_trait]
impl QuizRegistryRepository for MongoQuizRegistryRepository {
    async fn find_by_quiz_id(&self, quiz_id: &str) -> AppResult<Option<QuizRegistryEntry>> {
        let entry = self.collection.find_one(doc! { "quiz_id": quiz_id }).await?;
        Ok(entry)
    }

    async fn upsert(&self, entry: QuizRegistryEntry) -> AppResult<QuizRegistryEntry> {
        self.collection
            .delete_many(doc! { "quiz_id": &entry.quiz_id })
            .await?;
        self.collection.insert_one(&entry).await?;
        Ok(entry)
    }

    async fn list(&self, offset: i64, limit: i64) -> AppResult<(Vec<QuizRegistryEntry>, i64)> {
        use futures::TryStreamExt;
        use mongodb::options::FindOptions;

        let total = self.collection.count_documents(doc! {}).await? as i64;

        let find_options = FindOptions::builder()
            .skip(Some(offset as u64))
            .limit(Some(limit))
            .build();

        let cursor = self
            .collection
            .find(doc! {})
            .with_options(find_options)
            .await?;
        let items: Vec<QuizRegistryEntry> = cursor.try_collect().await?;

        Ok((items, total))
    }
}
