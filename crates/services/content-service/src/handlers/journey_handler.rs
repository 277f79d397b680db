//! Journey and day-schedule handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{Journey, JourneyDay, JourneyDayInput, JourneyInput, ListFilter};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create journey routes
pub fn journey_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_journeys).post(create_journey))
        .route(
            "/:id",
            get(get_journey).put(update_journey).delete(delete_journey),
        )
        .route("/:id/days", get(list_journey_days).post(add_journey_day))
        .route(
            "/:id/days/:day_id",
            put(update_journey_day).delete(delete_journey_day),
        )
}

/// List journeys, newest first
#[utoipa::path(
    get,
    path = "/api/journeys",
    tag = "Journeys",
    params(ListFilter),
    responses((status = 200, description = "Journeys", body = Vec<Journey>))
)]
pub async fn list_journeys(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<Json<Vec<Journey>>> {
    Ok(Json(state.journeys.list(filter).await?))
}

/// Get journey by ID
#[utoipa::path(
    get,
    path = "/api/journeys/{id}",
    tag = "Journeys",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Journey", body = Journey),
        (status = 404, description = "Journey not found")
    )
)]
pub async fn get_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Journey>> {
    Ok(Json(state.journeys.get(id).await?))
}

/// Create journey
#[utoipa::path(
    post,
    path = "/api/journeys",
    tag = "Journeys",
    request_body = JourneyInput,
    responses(
        (status = 201, description = "Journey created", body = Journey),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_journey(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<JourneyInput>,
) -> AppResult<(StatusCode, Json<Journey>)> {
    let journey = state.journeys.create(input).await?;
    Ok((StatusCode::CREATED, Json(journey)))
}

/// Replace journey fields
#[utoipa::path(
    put,
    path = "/api/journeys/{id}",
    tag = "Journeys",
    params(("id" = Uuid, Path, description = "Journey ID")),
    request_body = JourneyInput,
    responses(
        (status = 200, description = "Journey updated", body = Journey),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Journey not found")
    )
)]
pub async fn update_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<JourneyInput>,
) -> AppResult<Json<Journey>> {
    Ok(Json(state.journeys.update(id, input).await?))
}

/// Delete journey with its days and enquiries
#[utoipa::path(
    delete,
    path = "/api/journeys/{id}",
    tag = "Journeys",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 204, description = "Journey deleted"),
        (status = 404, description = "Journey not found")
    )
)]
pub async fn delete_journey(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.journeys.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a journey's days in day order
#[utoipa::path(
    get,
    path = "/api/journeys/{id}/days",
    tag = "Journeys",
    params(("id" = Uuid, Path, description = "Journey ID")),
    responses(
        (status = 200, description = "Day schedule", body = Vec<JourneyDay>),
        (status = 404, description = "Journey not found")
    )
)]
pub async fn list_journey_days(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Vec<JourneyDay>>> {
    Ok(Json(state.journeys.list_days(id).await?))
}

/// Add a day; the number defaults to one past the last day
#[utoipa::path(
    post,
    path = "/api/journeys/{id}/days",
    tag = "Journeys",
    params(("id" = Uuid, Path, description = "Journey ID")),
    request_body = JourneyDayInput,
    responses(
        (status = 201, description = "Day added", body = JourneyDay),
        (status = 404, description = "Journey not found")
    )
)]
pub async fn add_journey_day(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<JourneyDayInput>,
) -> AppResult<(StatusCode, Json<JourneyDay>)> {
    let day = state.journeys.add_day(id, input).await?;
    Ok((StatusCode::CREATED, Json(day)))
}

/// Edit a day
#[utoipa::path(
    put,
    path = "/api/journeys/{id}/days/{day_id}",
    tag = "Journeys",
    params(
        ("id" = Uuid, Path, description = "Journey ID"),
        ("day_id" = Uuid, Path, description = "Day ID")
    ),
    request_body = JourneyDayInput,
    responses(
        (status = 200, description = "Day updated", body = JourneyDay),
        (status = 404, description = "Day not found")
    )
)]
pub async fn update_journey_day(
    State(state): State<AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
    ValidatedJson(input): ValidatedJson<JourneyDayInput>,
) -> AppResult<Json<JourneyDay>> {
    Ok(Json(state.journeys.update_day(id, day_id, input).await?))
}

/// Remove a day
#[utoipa::path(
    delete,
    path = "/api/journeys/{id}/days/{day_id}",
    tag = "Journeys",
    params(
        ("id" = Uuid, Path, description = "Journey ID"),
        ("day_id" = Uuid, Path, description = "Day ID")
    ),
    responses(
        (status = 204, description = "Day deleted"),
        (status = 404, description = "Day not found")
    )
)]
pub async fn delete_journey_day(
    State(state): State<AppState>,
    Path((id, day_id)): Path<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.journeys.delete_day(id, day_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
