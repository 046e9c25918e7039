pub mod answer_key;
pub mod form_item;
pub mod grading;
pub mod question;
pub mod quiz;
pub mod submission;

pub use answer_key::{AnswerKey, AnswerKeyEntry};
pub use form_item::{FormChoice, FormItem};
pub use grading::{GradingResult, ItemOutcome, QuizRecordSummary, WrongAnswerLog, WrongAnswerRecord};
pub use question::GeneratedQuestion;
pub use quiz::QuizRegistryEntry;
pub use submission::{ItemAnswer, SubmissionResponse};
