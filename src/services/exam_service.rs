use std::sync::Arc;

use crate::models::exam::ExamResult;
use crate::services::model::{GenerativeModel, ModelError};
use crate::services::normalizer::{self, NormalizationError};

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Normalization(#[from] NormalizationError),
}

pub fn build_prompt(topic: &str, count: u32) -> String {
    format!(
        "Generate {count} exam questions on the topic: {topic}.\n\
         Respond with only a valid JSON array of objects, each with a \"question\" field and an \"answer\" field.\n\
         Do not include any explanation, markdown, or code fences around the array."
    )
}

#[derive(Clone)]
pub struct ExamService {
    model: Arc<dyn GenerativeModel>,
}

impl ExamService {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, topic: &str, count: u32) -> Result<ExamResult, GenerationError> {
        let prompt = build_prompt(topic, count);
        tracing::info!(topic, count, "Requesting exam from model");

        let text = self.model.generate(&prompt).await?;
        tracing::debug!(raw = %text, "Model response received");

        let exam = normalizer::normalize(&text)?;
        tracing::info!(items = exam.items().len(), "Exam normalized");
        Ok(exam)
    }
}
