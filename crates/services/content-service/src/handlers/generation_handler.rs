//! AI content generation handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use common::AppResult;
use domain::{GeneratedContent, GenerationRequest};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create generation routes
pub fn generation_routes() -> Router<AppState> {
    Router::new().route("/generate", post(generate_content))
}

/// Draft form fields for a title
#[utoipa::path(
    post,
    path = "/api/ai/generate",
    tag = "AI",
    request_body = GenerationRequest,
    responses(
        (status = 200, description = "Generated or fallback content", body = GeneratedContent),
        (status = 400, description = "Title is missing"),
        (status = 502, description = "Model request failed"),
        (status = 503, description = "Generation is not configured")
    )
)]
pub async fn generate_content(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GenerationRequest>,
) -> AppResult<Json<GeneratedContent>> {
    Ok(Json(state.generation.generate(request).await?))
}
