use std::sync::Arc;

use crate::{
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoAnswerKeyRepository, MongoGradingRecordRepository, MongoQuizRegistryRepository},
    services::{
        answer_key_service::UuidItemIdAssigner, extraction_service::HttpDocumentExtractor,
        generation_service::GeminiClient, grading_service::GradingService,
        quiz_service::QuizService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub grading_service: Arc<GradingService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let answer_key_repository = Arc::new(MongoAnswerKeyRepository::new(&db));
        answer_key_repository.ensure_indexes().await?;

        let grading_record_repository = Arc::new(MongoGradingRecordRepository::new(&db));
        let quiz_registry_repository = Arc::new(MongoQuizRegistryRepository::new(&db));

        let quiz_service = Arc::new(QuizService::new(
            Arc::new(GeminiClient::new(&config)),
            Arc::new(HttpDocumentExtractor::new()),
            Arc::new(UuidItemIdAssigner),
            answer_key_repository.clone(),
            quiz_registry_repository.clone(),
        ));

        let grading_service = Arc::new(GradingService::new(
            answer_key_repository,
            grading_record_repository,
            quiz_registry_repository,
        ));

        Ok(Self {
            quiz_service,
            grading_service,
            config: Arc::new(config),
        })
    }
}
