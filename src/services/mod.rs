pub mod answer_key_service;
pub mod extraction_service;
pub mod generation_service;
pub mod grading_service;
pub mod prompt_service;
pub mod quiz_service;
