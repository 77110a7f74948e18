use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value as JsonValue;

use crate::dto::exam_dto::{GenerateExamPayload, GenerateExamResponse};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can produce an exam for a topic and count.
#[async_trait]
pub trait ExamBackend: Send + Sync {
    async fn generate_exam(
        &self,
        topic: &str,
        count: u32,
    ) -> Result<GenerateExamResponse, ClientError>;
}

/// HTTP client for `POST /generate-exam`.
#[derive(Clone)]
pub struct ExamClient {
    client: Client,
    base_url: String,
}

impl ExamClient {
    pub fn new(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    fn endpoint(&self) -> String {
        format!("{}/generate-exam", self.base_url)
    }
}

#[async_trait]
impl ExamBackend for ExamClient {
    async fn generate_exam(
        &self,
        topic: &str,
        count: u32,
    ) -> Result<GenerateExamResponse, ClientError> {
        let payload = GenerateExamPayload {
            topic: topic.to_string(),
            count,
        };

        let res = self.client.post(self.endpoint()).json(&payload).send().await?;
        let status = res.status().as_u16();
        let body = res.bytes().await?;

        interpret_response(status, &body)
    }
}

/// Maps a status and raw body to the generation outcome. The body is read as JSON
/// whatever the status; an unreadable body counts as an empty object.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<GenerateExamResponse, ClientError> {
    let data: JsonValue =
        serde_json::from_slice(body).unwrap_or_else(|_| JsonValue::Object(Default::default()));

    if !(200..300).contains(&status) {
        let message = data
            .get("error")
            .and_then(|e| e.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status));
        return Err(ClientError::Http { status, message });
    }

    Ok(serde_json::from_value(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::exam::{ExamItem, ExamResult};

    #[test]
    fn server_error_message_is_surfaced_verbatim() {
        let err = interpret_response(500, br#"{"error":"Failed to generate exam"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Failed to generate exam");
        assert!(matches!(err, ClientError::Http { status: 500, .. }));
    }

    #[test]
    fn unparseable_error_body_reports_status() {
        let err = interpret_response(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(err.to_string().contains("502"));
    }

    #[test]
    fn error_body_without_message_reports_status() {
        let err = interpret_response(404, br#"{"detail":"nope"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 404");
    }

    #[test]
    fn success_body_is_decoded() {
        let resp =
            interpret_response(200, br#"{"questions":[{"question":"Q1","answer":"A1"}]}"#).unwrap();
        assert_eq!(resp.questions, ExamResult::from(vec![ExamItem::new("Q1", "A1")]));
    }

    #[test]
    fn success_with_text_questions() {
        let resp = interpret_response(200, br#"{"questions":"1. Q1"}"#).unwrap();
        assert_eq!(resp.questions, ExamResult::Text("1. Q1".into()));
    }

    #[test]
    fn success_with_unreadable_body_is_empty() {
        let resp = interpret_response(200, b"").unwrap();
        assert!(resp.questions.is_empty());
    }

    #[test]
    fn base_url_trailing_slash() {
        let client = ExamClient::new("http://localhost:5000/", Client::new());
        assert_eq!(client.endpoint(), "http://localhost:5000/generate-exam");
    }
}
