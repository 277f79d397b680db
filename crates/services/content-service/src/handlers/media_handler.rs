//! Image upload handlers.

use axum::{
    extract::{Multipart, Query, State},
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use common::{AppError, AppResult};

use crate::service::{ImageUpload, UploadedImage};
use crate::state::AppState;

/// Multipart form with a single `file` part
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct ImageForm {
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Image to remove
#[derive(Debug, Deserialize, IntoParams)]
pub struct DeleteImageQuery {
    /// URL previously returned by an upload
    pub url: String,
}

/// Create media routes
pub fn media_routes() -> Router<AppState> {
    Router::new().route("/", post(upload_image).delete(delete_image))
}

/// Upload an image; falls back to an inline data URL when storage fails
#[utoipa::path(
    post,
    path = "/api/media",
    tag = "Media",
    request_body(content = ImageForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Image uploaded", body = UploadedImage),
        (status = 400, description = "Missing, empty or non-image file")
    )
)]
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadedImage>)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::bad_request(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("image").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let uploaded = state
            .media
            .upload_image(ImageUpload {
                file_name,
                content_type,
                bytes: bytes.to_vec(),
            })
            .await?;
        return Ok((StatusCode::CREATED, Json(uploaded)));
    }

    Err(AppError::bad_request("Missing file field"))
}

/// Remove a stored image. Inline images and unknown URLs are ignored.
#[utoipa::path(
    delete,
    path = "/api/media",
    tag = "Media",
    params(DeleteImageQuery),
    responses((status = 204, description = "Image removed or nothing to remove"))
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Query(query): Query<DeleteImageQuery>,
) -> StatusCode {
    state.media.delete_image(&query.url).await;
    StatusCode::NO_CONTENT
}
