//! Package (blog post) handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{ListFilter, Package, PackageInput, RecentQuery};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create package routes
pub fn package_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_packages).post(create_package))
        .route("/recent", get(recent_packages))
        .route(
            "/:id",
            get(get_package).put(update_package).delete(delete_package),
        )
        .route("/:id/view", post(record_package_view))
}

/// List packages, newest first
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = "Packages",
    params(ListFilter),
    responses((status = 200, description = "Packages", body = Vec<Package>))
)]
pub async fn list_packages(
    State(state): State<AppState>,
    Query(filter): Query<ListFilter>,
) -> AppResult<Json<Vec<Package>>> {
    Ok(Json(state.packages.list(filter).await?))
}

/// Most recently published packages
#[utoipa::path(
    get,
    path = "/api/packages/recent",
    tag = "Packages",
    params(RecentQuery),
    responses((status = 200, description = "Recent packages", body = Vec<Package>))
)]
pub async fn recent_packages(
    State(state): State<AppState>,
    Query(query): Query<RecentQuery>,
) -> AppResult<Json<Vec<Package>>> {
    Ok(Json(state.packages.recent(query).await?))
}

/// Get package by ID
#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package", body = Package),
        (status = 404, description = "Package not found")
    )
)]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Package>> {
    Ok(Json(state.packages.get(id).await?))
}

/// Create package
#[utoipa::path(
    post,
    path = "/api/packages",
    tag = "Packages",
    request_body = PackageInput,
    responses(
        (status = 201, description = "Package created", body = Package),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_package(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<PackageInput>,
) -> AppResult<(StatusCode, Json<Package>)> {
    let package = state.packages.create(input).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

/// Replace package fields
#[utoipa::path(
    put,
    path = "/api/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    request_body = PackageInput,
    responses(
        (status = 200, description = "Package updated", body = Package),
        (status = 400, description = "Missing required fields"),
        (status = 404, description = "Package not found")
    )
)]
pub async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<PackageInput>,
) -> AppResult<Json<Package>> {
    Ok(Json(state.packages.update(id, input).await?))
}

/// Delete package
#[utoipa::path(
    delete,
    path = "/api/packages/{id}",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 204, description = "Package deleted"),
        (status = 404, description = "Package not found")
    )
)]
pub async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.packages.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Count a page view
#[utoipa::path(
    post,
    path = "/api/packages/{id}/view",
    tag = "Packages",
    params(("id" = Uuid, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package with updated view count", body = Package),
        (status = 404, description = "Package not found")
    )
)]
pub async fn record_package_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Package>> {
    Ok(Json(state.packages.record_view(id).await?))
}
