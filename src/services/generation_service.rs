use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::errors::GenerationError;
use crate::models::domain::GeneratedQuestion;

/// Seam over the generation endpoint. One outbound call per `generate`,
/// no retries; the endpoint is not assumed to be deterministic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Vec<GeneratedQuestion>, GenerationError>;
}

/// Gemini `generateContent` response envelope, reduced to the fields the
/// service reads.
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_base: String,
    api_key: SecretString,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: config.gemini_api_base.clone(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.api_base,
            self.model,
            self.api_key.expose_secret()
        )
    }
}

#[async_trait]
impl QuestionGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

        let response = self
            .http
            .post(self.endpoint_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport {
                status: 0,
                body: e.to_string(),
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GenerationError::Transport {
                status: status.as_u16(),
                body: e.to_string(),
            })?;

        if !status.is_success() {
            log::warn!("Gemini API returned {}: {}", status, text);
            return Err(GenerationError::Transport {
                status: status.as_u16(),
                body: text,
            });
        }

        let envelope: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| GenerationError::MalformedOutput(format!("invalid envelope: {}", e)))?;

        extract_questions(envelope)
    }
}

/// Pulls the candidate text out of the envelope and parses it as the
/// question array. Missing candidates mean the prompt was blocked.
fn extract_questions(
    envelope: GenerateContentResponse,
) -> Result<Vec<GeneratedQuestion>, GenerationError> {
    let raw = envelope
        .candidates
        .first()
        .and_then(|c| c.content.parts.first())
        .map(|p| p.text.clone())
        .ok_or_else(|| {
            let reason = envelope
                .prompt_feedback
                .and_then(|f| f.block_reason)
                .unwrap_or_else(|| "unknown".to_string());
            GenerationError::Blocked { reason }
        })?;

    parse_question_payload(&raw)
}

/// Strips markdown code-fence markers and parses the remainder as a JSON
/// array of questions.
pub fn parse_question_payload(raw: &str) -> Result<Vec<GeneratedQuestion>, GenerationError> {
    let cleaned = raw.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();

    serde_json::from_str(cleaned).map_err(|e| GenerationError::MalformedOutput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION_JSON: &str = r#"[{"question":"水的化學式是什麼？","options":["H2O","CO2","O2","NaCl"],"answerIndex":0,"explanation":"水分子由兩個氫原子與一個氧原子組成。","points":1}]"#;

    #[test]
    fn parses_bare_json_array() {
        let questions = parse_question_payload(QUESTION_JSON).expect("payload should parse");

        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_answer(), Some("H2O"));
    }

    #[test]
    fn strips_code_fences_before_parsing() {
        let fenced = format!("```json\n{}\n```", QUESTION_JSON);
        let questions = parse_question_payload(&fenced).expect("fenced payload should parse");

        assert_eq!(questions.len(), 1);
    }

    #[test]
    fn prose_payload_is_malformed_output() {
        let err = parse_question_payload("好的，以下是你要的題目：...").unwrap_err();

        assert!(matches!(err, GenerationError::MalformedOutput(_)));
    }

    #[test]
    fn envelope_without_candidates_is_blocked_with_reason() {
        let envelope: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[],"promptFeedback":{"blockReason":"SAFETY"}}"#,
        )
        .expect("envelope should deserialize");

        let err = extract_questions(envelope).unwrap_err();
        match err {
            GenerationError::Blocked { reason } => assert_eq!(reason, "SAFETY"),
            other => panic!("expected Blocked, got {:?}", other),
        }
    }

    #[test]
    fn envelope_without_candidates_or_feedback_reports_unknown() {
        let envelope: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates":[]}"#).expect("envelope should deserialize");

        let err = extract_questions(envelope).unwrap_err();
        assert!(matches!(err, GenerationError::Blocked { reason } if reason == "unknown"));
    }

    #[test]
    fn envelope_with_candidate_text_yields_questions() {
        let envelope_json = serde_json::json!({
            "candidates": [{
                "content": { "parts": [{ "text": format!("```json\n{}\n```", QUESTION_JSON) }] }
            }]
        });
        let envelope: GenerateContentResponse =
            serde_json::from_value(envelope_json).expect("envelope should deserialize");

        let questions = extract_questions(envelope).expect("questions should parse");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].question, "水的化學式是什麼？");
    }

    #[test]
    fn endpoint_url_targets_configured_model() {
        let client = GeminiClient::new(&Config::test_config());
        let url = client.endpoint_url();

        assert!(url.starts_with("http://127.0.0.1:9/v1beta/models/gemini-2.5-flash:generateContent"));
        assert!(url.contains("key=test_api_key"));
    }
}
