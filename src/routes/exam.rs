use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    dto::exam_dto::{ErrorResponse, GenerateExamPayload, GenerateExamResponse},
    error::Result,
    AppState,
};

/// Any failure, including a body that does not parse or validate, is reported as
/// `500 {"error": "Failed to generate exam"}`.
#[utoipa::path(
    post,
    path = "/generate-exam",
    request_body = GenerateExamPayload,
    responses(
        (status = 200, description = "Exam generated", body = GenerateExamResponse),
        (status = 500, description = "Request rejected or generation failed", body = ErrorResponse)
    )
)]
#[axum::debug_handler]
pub async fn generate_exam(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateExamPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload.validate()?;
    let questions = state
        .exam_service
        .generate(payload.topic.trim(), payload.count)
        .await?;
    Ok(Json(GenerateExamResponse { questions }))
}
