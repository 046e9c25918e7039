use async_trait::async_trait;

use crate::constants::prompts::EXTRACTION_MIN_CHARS;
use crate::errors::ExtractionError;

/// Reads a reference document into plain text. Failures are recovered by
/// the orchestration layer (fallback to open-mode generation), so
/// implementations should fail fast rather than retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentTextExtractor: Send + Sync {
    async fn extract(&self, reference: &str) -> Result<String, ExtractionError>;
}

/// Fetches the reference URL over HTTP and returns the response body.
pub struct HttpDocumentExtractor {
    http: reqwest::Client,
}

impl HttpDocumentExtractor {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }
}

impl Default for HttpDocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentTextExtractor for HttpDocumentExtractor {
    async fn extract(&self, reference: &str) -> Result<String, ExtractionError> {
        let response = self
            .http
            .get(reference)
            .send()
            .await
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ExtractionError::Unreadable(format!(
                "document fetch returned {}",
                response.status()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))?;

        let length = text.chars().count();
        if length < EXTRACTION_MIN_CHARS {
            return Err(ExtractionError::TooShort(length));
        }

        Ok(text)
    }
}
