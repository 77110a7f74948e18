use crate::dto::exam_dto::MAX_QUESTIONS;

/// A request that passed form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub topic: String,
    pub count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a topic.")]
    EmptyTopic,

    #[error("Please enter a valid whole number of questions (e.g., 5).")]
    InvalidCount,

    #[error("Please request 50 questions or fewer.")]
    TooManyQuestions,
}

/// Validates the raw form fields.
///
/// The count is read the way a browser number input reads it: surrounding
/// whitespace is ignored and any integral value (`"5"`, `"5.0"`, `"1e1"`) is accepted.
pub fn validate_request(topic: &str, count: &str) -> Result<GenerationRequest, ValidationError> {
    let topic = topic.trim();
    if topic.is_empty() {
        return Err(ValidationError::EmptyTopic);
    }

    let n: f64 = count
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidCount)?;
    if !n.is_finite() || n.fract() != 0.0 || n <= 0.0 {
        return Err(ValidationError::InvalidCount);
    }
    if n > f64::from(MAX_QUESTIONS) {
        return Err(ValidationError::TooManyQuestions);
    }

    Ok(GenerationRequest {
        topic: topic.to_string(),
        count: n as u32,
    })
}
