//! Experience handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{Experience, ExperienceInput, ListFilter};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create experience routes
pub fn experience_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_experiences).post(create_experience))
        .route(
            "/:id",
            get(get_experience)
                .put(update_experience)
                .delete(delete_experience),
        )
}

#[utoipa::path(
    get,
    path = "/api/experiences",
    tag = "Experiences",
    params(ListFilter),
    responses((status = 200, description = "Experiences", body = Vec<Experience>))
)]
pub async fn list_experiences(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<Json<Vec<Experience>>> {
    Ok(Json(state.experiences.list(filter).await?))
}

#[utoipa::path(
    get,
    path = "/api/experiences/{id}",
    tag = "Experiences",
    params(("id" = Uuid, Path, description = "Experience ID")),
    responses(
        (status = 200, description = "Experience", body = Experience),
        (status = 404, description = "Experience not found")
    )
)]
pub async fn get_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Experience>> {
    Ok(Json(state.experiences.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/experiences",
    tag = "Experiences",
    request_body = ExperienceInput,
    responses(
        (status = 201, description = "Experience created", body = Experience),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_experience(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ExperienceInput>,
) -> AppResult<(StatusCode, Json<Experience>)> {
    let experience = state.experiences.create(input).await?;
    Ok((StatusCode::CREATED, Json(experience)))
}

#[utoipa::path(
    put,
    path = "/api/experiences/{id}",
    tag = "Experiences",
    params(("id" = Uuid, Path, description = "Experience ID")),
    request_body = ExperienceInput,
    responses(
        (status = 200, description = "Experience updated", body = Experience),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Experience not found")
    )
)]
pub async fn update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<ExperienceInput>,
) -> AppResult<Json<Experience>> {
    Ok(Json(state.experiences.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/experiences/{id}",
    tag = "Experiences",
    params(("id" = Uuid, Path, description = "Experience ID")),
    responses(
        (status = 204, description = "Experience deleted"),
        (status = 404, description = "Experience not found")
    )
)]
pub async fn delete_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.experiences.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
