//! Enquiry handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{Enquiry, EnquiryInput, EnquiryUpdate};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create enquiry routes
pub fn enquiry_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_enquiries).post(submit_enquiry))
        .route(
            "/:id",
            get(get_enquiry).patch(update_enquiry).delete(delete_enquiry),
        )
}

/// Admin inbox, newest first
#[utoipa::path(
    get,
    path = "/api/enquiries",
    tag = "Enquiries",
    responses((status = 200, description = "Enquiries", body = Vec<Enquiry>))
)]
pub async fn list_enquiries(State(state): State<AppState>) -> AppResult<Json<Vec<Enquiry>>> {
    Ok(Json(state.enquiries.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/enquiries/{id}",
    tag = "Enquiries",
    params(("id" = Uuid, Path, description = "Enquiry ID")),
    responses(
        (status = 200, description = "Enquiry", body = Enquiry),
        (status = 404, description = "Enquiry not found")
    )
)]
pub async fn get_enquiry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Enquiry>> {
    Ok(Json(state.enquiries.get(id).await?))
}

/// Public enquiry form submission
#[utoipa::path(
    post,
    path = "/api/enquiries",
    tag = "Enquiries",
    request_body = EnquiryInput,
    responses(
        (status = 201, description = "Enquiry received", body = Enquiry),
        (status = 400, description = "Invalid submission")
    )
)]
pub async fn submit_enquiry(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<EnquiryInput>,
) -> AppResult<(StatusCode, Json<Enquiry>)> {
    let enquiry = state.enquiries.submit(input).await?;
    Ok((StatusCode::CREATED, Json(enquiry)))
}

/// Mark read or change status
#[utoipa::path(
    patch,
    path = "/api/enquiries/{id}",
    tag = "Enquiries",
    params(("id" = Uuid, Path, description = "Enquiry ID")),
    request_body = EnquiryUpdate,
    responses(
        (status = 200, description = "Enquiry updated", body = Enquiry),
        (status = 400, description = "Unknown status"),
        (status = 404, description = "Enquiry not found")
    )
)]
pub async fn update_enquiry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(update): ValidatedJson<EnquiryUpdate>,
) -> AppResult<Json<Enquiry>> {
    Ok(Json(state.enquiries.update(id, update).await?))
}

#[utoipa::path(
    delete,
    path = "/api/enquiries/{id}",
    tag = "Enquiries",
    params(("id" = Uuid, Path, description = "Enquiry ID")),
    responses(
        (status = 204, description = "Enquiry deleted"),
        (status = 404, description = "Enquiry not found")
    )
)]
pub async fn delete_enquiry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.enquiries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
