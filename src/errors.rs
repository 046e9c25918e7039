use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failures of the generation round trip. Each variant carries its own
/// diagnostic; none is retried here — retry policy belongs to the caller.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Generation transport error ({status}): {body}")]
    Transport { status: u16, body: String },

    #[error("Generation blocked by the endpoint: {reason}")]
    Blocked { reason: String },

    #[error("Generation output is not valid question JSON: {0}")]
    MalformedOutput(String),
}

/// Failures while reading a reference document. Recovered locally by
/// falling back to open-mode generation; never surfaced to API callers.
#[derive(Debug, Clone, Error)]
pub enum ExtractionError {
    #[error("Reference document unreadable: {0}")]
    Unreadable(String),

    #[error("Reference document too short ({0} chars)")]
    TooShort(usize),
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Generation error: {0}")]
    GenerationError(#[from] GenerationError),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::GenerationError(GenerationError::Transport { .. }) => StatusCode::BAD_GATEWAY,
            AppError::GenerationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
