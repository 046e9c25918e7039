pub mod answer_key_repository;
pub mod grading_record_repository;
pub mod quiz_registry_repository;

pub use answer_key_repository::{AnswerKeyRepository, MongoAnswerKeyRepository};
pub use grading_record_repository::{GradingRecordRepository, MongoGradingRecordRepository};
pub use quiz_registry_repository::{MongoQuizRegistryRepository, QuizRegistryRepository};

#[cfg(test)]
pub use answer_key_repository::MockAnswerKeyRepository;
#[cfg(test)]
pub use grading_record_repository::MockGradingRecordRepository;
#[cfg(test)]
pub use quiz_registry_repository::MockQuizRegistryRepository;
