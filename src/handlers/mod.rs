pub mod quiz_handler;

pub use quiz_handler::{create_quiz, health_check, list_quizzes, regenerate_quiz, submit_response};
