pub mod exam;
pub mod health;

use axum::{
    routing::{get, post},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    dto::exam_dto::{ErrorResponse, GenerateExamPayload, GenerateExamResponse},
    models::exam::ExamItem,
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(health::health, exam::generate_exam),
    components(schemas(GenerateExamPayload, GenerateExamResponse, ErrorResponse, ExamItem))
)]
pub struct ApiDoc;

async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// API routes with state applied. Transport layers (CORS, tracing, static files)
/// are added by the binary.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi))
        .route("/generate-exam", post(exam::generate_exam))
        .with_state(state)
}
