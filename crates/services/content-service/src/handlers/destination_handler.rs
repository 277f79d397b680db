//! Destination handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use common::AppResult;
use domain::{Destination, DestinationInput, ListFilter, NestedCollection};

use crate::extractors::ValidatedJson;
use crate::service::AppendedItems;
use crate::state::AppState;

/// Items to append to one of a destination's keyed collections
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AppendItemsRequest {
    pub collection: NestedCollection,
    /// Items in the collection's shape; ids are assigned on save
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Value>,
}

/// Create destination routes
pub fn destination_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_destinations).post(create_destination))
        .route("/slug/:slug", get(get_destination_by_slug))
        .route(
            "/:id",
            get(get_destination)
                .put(update_destination)
                .delete(delete_destination),
        )
        .route("/:id/items", post(append_destination_items))
}

/// List destinations, newest first
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = "Destinations",
    params(ListFilter),
    responses(
        (status = 200, description = "Destinations", body = Vec<Destination>)
    )
)]
pub async fn list_destinations(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<Json<Vec<Destination>>> {
    Ok(Json(state.destinations.list(filter).await?))
}

/// Get destination by ID
#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = "Destinations",
    params(("id" = Uuid, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination", body = Destination),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Destination>> {
    Ok(Json(state.destinations.get(id).await?))
}

/// Get destination by URL slug
#[utoipa::path(
    get,
    path = "/api/destinations/slug/{slug}",
    tag = "Destinations",
    params(("slug" = String, Path, description = "Destination slug")),
    responses(
        (status = 200, description = "Destination", body = Destination),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn get_destination_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<Destination>> {
    Ok(Json(state.destinations.get_by_slug(&slug).await?))
}

/// Create destination
#[utoipa::path(
    post,
    path = "/api/destinations",
    tag = "Destinations",
    request_body = DestinationInput,
    responses(
        (status = 201, description = "Destination created", body = Destination),
        (status = 400, description = "Missing required fields"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn create_destination(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<DestinationInput>,
) -> AppResult<(StatusCode, Json<Destination>)> {
    let destination = state.destinations.create(input).await?;
    Ok((StatusCode::CREATED, Json(destination)))
}

/// Replace destination fields
#[utoipa::path(
    put,
    path = "/api/destinations/{id}",
    tag = "Destinations",
    params(("id" = Uuid, Path, description = "Destination ID")),
    request_body = DestinationInput,
    responses(
        (status = 200, description = "Destination updated", body = Destination),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Destination not found"),
        (status = 409, description = "Slug already in use")
    )
)]
pub async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<DestinationInput>,
) -> AppResult<Json<Destination>> {
    Ok(Json(state.destinations.update(id, input).await?))
}

/// Delete destination
#[utoipa::path(
    delete,
    path = "/api/destinations/{id}",
    tag = "Destinations",
    params(("id" = Uuid, Path, description = "Destination ID")),
    responses(
        (status = 204, description = "Destination deleted"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.destinations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Append generated items to a keyed collection
#[utoipa::path(
    post,
    path = "/api/destinations/{id}/items",
    tag = "Destinations",
    params(("id" = Uuid, Path, description = "Destination ID")),
    request_body = AppendItemsRequest,
    responses(
        (status = 200, description = "Items appended", body = AppendedItems),
        (status = 400, description = "No items or malformed item"),
        (status = 404, description = "Destination not found")
    )
)]
pub async fn append_destination_items(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<AppendItemsRequest>,
) -> AppResult<Json<AppendedItems>> {
    let appended = state
        .destinations
        .append_items(id, request.collection, request.items)
        .await?;
    Ok(Json(appended))
}
