use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppResult;
use crate::models::domain::QuizRegistryEntry;
use crate::models::dto::request::GenerateQuizRequest;
use crate::models::dto::response::QuizCreatedResponse;
use crate::repositories::{AnswerKeyRepository, QuizRegistryRepository};
use crate::services::answer_key_service::{build_answer_key, ItemIdAssigner};
use crate::services::extraction_service::DocumentTextExtractor;
use crate::services::generation_service::QuestionGenerator;
use crate::services::prompt_service::build_prompt;

/// End-to-end quiz creation: reference extraction (with open-mode
/// fallback), prompt construction, generation, validation, answer-key
/// replacement, registry upkeep.
pub struct QuizService {
    generator: Arc<dyn QuestionGenerator>,
    extractor: Arc<dyn DocumentTextExtractor>,
    assigner: Arc<dyn ItemIdAssigner>,
    answer_keys: Arc<dyn AnswerKeyRepository>,
    registry: Arc<dyn QuizRegistryRepository>,
}

impl QuizService {
    pub fn new(
        generator: Arc<dyn QuestionGenerator>,
        extractor: Arc<dyn DocumentTextExtractor>,
        assigner: Arc<dyn ItemIdAssigner>,
        answer_keys: Arc<dyn AnswerKeyRepository>,
        registry: Arc<dyn QuizRegistryRepository>,
    ) -> Self {
        Self {
            generator,
            extractor,
            assigner,
            answer_keys,
            registry,
        }
    }

    /// Create a new quiz under a fresh id.
    pub async fn generate_quiz(
        &self,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizCreatedResponse> {
        let quiz_id = Uuid::new_v4().to_string();
        self.build_quiz(&quiz_id, request).await
    }

    /// Regenerate an existing quiz in place. The previous answer key is
    /// discarded entirely, never merged.
    pub async fn regenerate_quiz(
        &self,
        quiz_id: &str,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizCreatedResponse> {
        self.build_quiz(quiz_id, request).await
    }

    pub async fn list_quizzes(
        &self,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<QuizRegistryEntry>, i64)> {
        self.registry.list(offset, limit).await
    }

    async fn build_quiz(
        &self,
        quiz_id: &str,
        request: GenerateQuizRequest,
    ) -> AppResult<QuizCreatedResponse> {
        request.validate()?;

        // Extraction failure is recovered locally: log and fall back to
        // open-mode generation instead of surfacing the error.
        let reference_text = match &request.document_url {
            Some(url) => match self.extractor.extract(url).await {
                Ok(text) => {
                    log::info!(
                        "Extracted {} chars of reference text for quiz '{}'",
                        text.chars().count(),
                        quiz_id
                    );
                    Some(text)
                }
                Err(e) => {
                    log::warn!(
                        "Reference extraction failed for quiz '{}', falling back to open mode: {}",
                        quiz_id,
                        e
                    );
                    None
                }
            },
            None => None,
        };

        let prompt = build_prompt(
            request.topic.as_deref(),
            request.question_count,
            reference_text.as_deref(),
        );

        let questions = self.generator.generate(&prompt).await?;

        let (key, items) = build_answer_key(quiz_id, &questions, self.assigner.as_ref())?;
        let key = self.answer_keys.replace(key).await?;

        self.registry
            .upsert(QuizRegistryEntry::new(
                quiz_id,
                &request.title,
                key.len() as i32,
            ))
            .await?;

        Ok(QuizCreatedResponse {
            quiz_id: quiz_id.to_string(),
            title: request.title,
            total_questions: items.len(),
            updated_at: Utc::now(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{AppError, ExtractionError, GenerationError};
    use crate::models::domain::GeneratedQuestion;
    use crate::repositories::{MockAnswerKeyRepository, MockQuizRegistryRepository};
    use crate::services::answer_key_service::UuidItemIdAssigner;
    use crate::services::extraction_service::MockDocumentTextExtractor;
    use crate::services::generation_service::MockQuestionGenerator;

    fn make_questions(count: usize) -> Vec<GeneratedQuestion> {
        (0..count)
            .map(|i| GeneratedQuestion {
                question: format!("第{}題的題目", i + 1),
                options: vec![
                    "甲".to_string(),
                    "乙".to_string(),
                    "丙".to_string(),
                    "丁".to_string(),
                ],
                answer_index: i % 4,
                explanation: Some("解析".to_string()),
                points: 1,
            })
            .collect()
    }

    fn make_request(document_url: Option<&str>) -> GenerateQuizRequest {
        GenerateQuizRequest {
            title: "自然科小考".to_string(),
            topic: Some("光合作用".to_string()),
            question_count: Some(3),
            document_url: document_url.map(str::to_string),
        }
    }

    fn make_service(
        generator: MockQuestionGenerator,
        extractor: MockDocumentTextExtractor,
        answer_keys: MockAnswerKeyRepository,
        registry: MockQuizRegistryRepository,
    ) -> QuizService {
        QuizService::new(
            Arc::new(generator),
            Arc::new(extractor),
            Arc::new(UuidItemIdAssigner),
            Arc::new(answer_keys),
            Arc::new(registry),
        )
    }

    #[actix_web::test]
    async fn generate_without_document_uses_open_mode() {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("專業教師") && prompt.contains("光合作用"))
            .times(1)
            .returning(|_| Ok(make_questions(3)));

        let mut extractor = MockDocumentTextExtractor::new();
        extractor.expect_extract().times(0);

        let mut answer_keys = MockAnswerKeyRepository::new();
        answer_keys.expect_replace().returning(|value| Ok(value));

        let mut registry = MockQuizRegistryRepository::new();
        registry
            .expect_upsert()
            .withf(|entry| entry.item_count == 3)
            .returning(|value| Ok(value));

        let service = make_service(generator, extractor, answer_keys, registry);

        let response = service
            .generate_quiz(make_request(None))
            .await
            .expect("generation should succeed");

        assert_eq!(response.total_questions, 3);
        assert_eq!(response.items[0].title, "1. 第1題的題目");
        assert_eq!(response.items[2].title, "3. 第3題的題目");
    }

    #[actix_web::test]
    async fn long_reference_switches_to_restricted_mode() {
        let reference = "參".repeat(120);
        let expected = reference.clone();

        let mut extractor = MockDocumentTextExtractor::new();
        extractor
            .expect_extract()
            .times(1)
            .returning(move |_| Ok(reference.clone()));

        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(move |prompt: &str| {
                prompt.contains("閱讀測驗出題機器") && prompt.contains(&expected)
            })
            .times(1)
            .returning(|_| Ok(make_questions(3)));

        let mut answer_keys = MockAnswerKeyRepository::new();
        answer_keys.expect_replace().returning(|value| Ok(value));

        let mut registry = MockQuizRegistryRepository::new();
        registry.expect_upsert().returning(|value| Ok(value));

        let service = make_service(generator, extractor, answer_keys, registry);

        service
            .generate_quiz(make_request(Some("https://docs.example.com/doc")))
            .await
            .expect("generation should succeed");
    }

    #[actix_web::test]
    async fn extraction_failure_falls_back_to_open_mode() {
        let mut extractor = MockDocumentTextExtractor::new();
        extractor
            .expect_extract()
            .times(1)
            .returning(|_| Err(ExtractionError::TooShort(4)));

        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt: &str| prompt.contains("專業教師"))
            .times(1)
            .returning(|_| Ok(make_questions(3)));

        let mut answer_keys = MockAnswerKeyRepository::new();
        answer_keys.expect_replace().returning(|value| Ok(value));

        let mut registry = MockQuizRegistryRepository::new();
        registry.expect_upsert().returning(|value| Ok(value));

        let service = make_service(generator, extractor, answer_keys, registry);

        service
            .generate_quiz(make_request(Some("https://docs.example.com/doc")))
            .await
            .expect("fallback generation should succeed");
    }

    #[actix_web::test]
    async fn transport_failure_creates_no_answer_key() {
        let mut generator = MockQuestionGenerator::new();
        generator.expect_generate().times(1).returning(|_| {
            Err(GenerationError::Transport {
                status: 429,
                body: "quota exceeded".to_string(),
            })
        });

        let extractor = MockDocumentTextExtractor::new();

        let mut answer_keys = MockAnswerKeyRepository::new();
        answer_keys.expect_replace().times(0);

        let mut registry = MockQuizRegistryRepository::new();
        registry.expect_upsert().times(0);

        let service = make_service(generator, extractor, answer_keys, registry);

        let result = service.generate_quiz(make_request(None)).await;

        match result {
            Err(AppError::GenerationError(GenerationError::Transport { status, .. })) => {
                assert_eq!(status, 429)
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }

    #[actix_web::test]
    async fn invalid_request_is_rejected_before_generation() {
        let mut generator = MockQuestionGenerator::new();
        generator.expect_generate().times(0);

        let extractor = MockDocumentTextExtractor::new();
        let answer_keys = MockAnswerKeyRepository::new();
        let registry = MockQuizRegistryRepository::new();

        let service = make_service(generator, extractor, answer_keys, registry);

        let mut request = make_request(None);
        request.title = String::new();

        let result = service.generate_quiz(request).await;

        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }
}
