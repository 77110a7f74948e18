use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::exam::{ExamItem, ExamResult};

pub const MAX_QUESTIONS: u32 = 50;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateExamPayload {
    #[validate(custom(function = "not_blank"))]
    pub topic: String,
    #[validate(range(min = 1, max = 50, message = "Count must be between 1 and 50"))]
    pub count: u32,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("blank");
        err.message = Some("Topic must not be empty".into());
        return Err(err);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateExamResponse {
    #[serde(default)]
    #[schema(value_type = Vec<ExamItem>)]
    pub questions: ExamResult,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
