//! Resort handlers: activities, stay packages and the photo gallery.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use common::AppResult;
use domain::{
    GalleryItem, GalleryItemInput, ResortActivity, ResortActivityInput, ResortPackage,
    ResortPackageInput,
};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Create resort routes
pub fn resort_routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route(
            "/activities/:id",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
        .route(
            "/packages",
            get(list_resort_packages).post(create_resort_package),
        )
        .route(
            "/packages/:id",
            get(get_resort_package)
                .put(update_resort_package)
                .delete(delete_resort_package),
        )
        .route("/gallery", get(list_gallery).post(create_gallery_item))
        .route(
            "/gallery/:id",
            get(get_gallery_item)
                .put(update_gallery_item)
                .delete(delete_gallery_item),
        )
}

// =============================================================================
// Activities
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/resort/activities",
    tag = "Resort",
    responses((status = 200, description = "Resort activities", body = Vec<ResortActivity>))
)]
pub async fn list_activities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResortActivity>>> {
    Ok(Json(state.resort_activities.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/resort/activities/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Activity ID")),
    responses(
        (status = 200, description = "Resort activity", body = ResortActivity),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResortActivity>> {
    Ok(Json(state.resort_activities.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/resort/activities",
    tag = "Resort",
    request_body = ResortActivityInput,
    responses(
        (status = 201, description = "Activity created", body = ResortActivity),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_activity(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ResortActivityInput>,
) -> AppResult<(StatusCode, Json<ResortActivity>)> {
    let activity = state.resort_activities.create(input).await?;
    Ok((StatusCode::CREATED, Json(activity)))
}

#[utoipa::path(
    put,
    path = "/api/resort/activities/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Activity ID")),
    request_body = ResortActivityInput,
    responses(
        (status = 200, description = "Activity updated", body = ResortActivity),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<ResortActivityInput>,
) -> AppResult<Json<ResortActivity>> {
    Ok(Json(state.resort_activities.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/resort/activities/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Activity ID")),
    responses(
        (status = 204, description = "Activity deleted"),
        (status = 404, description = "Activity not found")
    )
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.resort_activities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Stay packages
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/resort/packages",
    tag = "Resort",
    responses((status = 200, description = "Resort packages", body = Vec<ResortPackage>))
)]
pub async fn list_resort_packages(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ResortPackage>>> {
    Ok(Json(state.resort_packages.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/resort/packages/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Resort package ID")),
    responses(
        (status = 200, description = "Resort package", body = ResortPackage),
        (status = 404, description = "Resort package not found")
    )
)]
pub async fn get_resort_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ResortPackage>> {
    Ok(Json(state.resort_packages.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/resort/packages",
    tag = "Resort",
    request_body = ResortPackageInput,
    responses(
        (status = 201, description = "Resort package created", body = ResortPackage),
        (status = 400, description = "Missing required fields")
    )
)]
pub async fn create_resort_package(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ResortPackageInput>,
) -> AppResult<(StatusCode, Json<ResortPackage>)> {
    let package = state.resort_packages.create(input).await?;
    Ok((StatusCode::CREATED, Json(package)))
}

#[utoipa::path(
    put,
    path = "/api/resort/packages/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Resort package ID")),
    request_body = ResortPackageInput,
    responses(
        (status = 200, description = "Resort package updated", body = ResortPackage),
        (status = 404, description = "Resort package not found")
    )
)]
pub async fn update_resort_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<ResortPackageInput>,
) -> AppResult<Json<ResortPackage>> {
    Ok(Json(state.resort_packages.update(id, input).await?))
}

#[utoipa::path(
    delete,
    path = "/api/resort/packages/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Resort package ID")),
    responses(
        (status = 204, description = "Resort package deleted"),
        (status = 404, description = "Resort package not found")
    )
)]
pub async fn delete_resort_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.resort_packages.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Gallery
// =============================================================================

/// Gallery items in display order
#[utoipa::path(
    get,
    path = "/api/resort/gallery",
    tag = "Resort",
    responses((status = 200, description = "Gallery items", body = Vec<GalleryItem>))
)]
pub async fn list_gallery(State(state): State<AppState>) -> AppResult<Json<Vec<GalleryItem>>> {
    Ok(Json(state.gallery.list().await?))
}

#[utoipa::path(
    get,
    path = "/api/resort/gallery/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Gallery item ID")),
    responses(
        (status = 200, description = "Gallery item", body = GalleryItem),
        (status = 404, description = "Gallery item not found")
    )
)]
pub async fn get_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<GalleryItem>> {
    Ok(Json(state.gallery.get(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/resort/gallery",
    tag = "Resort",
    request_body = GalleryItemInput,
    responses(
        (status = 201, description = "Gallery item created", body = GalleryItem),
        (status = 400, description = "Image is required")
    )
)]
pub async fn create_gallery_item(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<GalleryItemInput>,
) -> AppResult<(StatusCode, Json<GalleryItem>)> {
    let item = state.gallery.create(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/resort/gallery/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Gallery item ID")),
    request_body = GalleryItemInput,
    responses(
        (status = 200, description = "Gallery item updated", body = GalleryItem),
        (status = 404, description = "Gallery item not found")
    )
)]
pub async fn update_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(input): ValidatedJson<GalleryItemInput>,
) -> AppResult<Json<GalleryItem>> {
    Ok(Json(state.gallery.update(id, input).await?))
}

/// Delete a gallery item and its stored image
#[utoipa::path(
    delete,
    path = "/api/resort/gallery/{id}",
    tag = "Resort",
    params(("id" = Uuid, Path, description = "Gallery item ID")),
    responses(
        (status = 204, description = "Gallery item deleted"),
        (status = 404, description = "Gallery item not found")
    )
)]
pub async fn delete_gallery_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.gallery.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
