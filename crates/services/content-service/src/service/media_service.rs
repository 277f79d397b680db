//! Media service - image uploads with an inline fallback.
//!
//! Uploads go to object storage when it is configured and reachable.
//! Otherwise the image is embedded in the record as a base64 `data:` URL,
//! so saving a form never fails because storage is down.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

use common::{AppError, AppResult};
use domain::media::{is_image_content_type, storage_key, stored_key_from_url};

use crate::clients::ObjectStorage;

/// Image received from the client, already cropped
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Where an uploaded image can be fetched from
#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct UploadedImage {
    pub url: String,
    /// False when the image was embedded as a data URL
    pub stored: bool,
}

#[async_trait]
pub trait MediaService: Send + Sync {
    async fn upload_image(&self, upload: ImageUpload) -> AppResult<UploadedImage>;

    /// Remove a stored image. Never fails; problems are logged.
    async fn delete_image(&self, url: &str);
}

pub struct MediaManager {
    storage: Option<Arc<dyn ObjectStorage>>,
}

impl MediaManager {
    pub fn new(storage: Option<Arc<dyn ObjectStorage>>) -> Self {
        Self { storage }
    }
}

fn data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

#[async_trait]
impl MediaService for MediaManager {
    async fn upload_image(&self, upload: ImageUpload) -> AppResult<UploadedImage> {
        if upload.bytes.is_empty() {
            return Err(AppError::bad_request("Image file is empty"));
        }
        if !is_image_content_type(&upload.content_type) {
            return Err(AppError::bad_request("Please select an image file"));
        }

        if let Some(storage) = &self.storage {
            let key = storage_key(&upload.file_name);
            match storage
                .put_object(&key, upload.bytes.clone(), &upload.content_type)
                .await
            {
                Ok(url) => {
                    info!(%key, "Image uploaded");
                    return Ok(UploadedImage { url, stored: true });
                }
                Err(e) => warn!(error = %e, %key, "Image upload failed, embedding as data URL"),
            }
        } else {
            debug!("Object storage not configured, embedding image as data URL");
        }

        Ok(UploadedImage {
            url: data_url(&upload.content_type, &upload.bytes),
            stored: false,
        })
    }

    async fn delete_image(&self, url: &str) {
        let Some(storage) = &self.storage else {
            return;
        };
        let Some(key) = stored_key_from_url(url) else {
            debug!("Image is not in object storage, nothing to delete");
            return;
        };

        if let Err(e) = storage.delete_object(&key).await {
            warn!(error = %e, %key, "Failed to delete stored image");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MockObjectStorage;

    fn upload() -> ImageUpload {
        ImageUpload {
            file_name: "phewa lake.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }

    #[tokio::test]
    async fn test_upload_to_storage() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_put_object()
            .withf(|key, bytes, content_type| {
                key.ends_with("-phewa_lake.png") && bytes.len() == 4 && content_type == "image/png"
            })
            .returning(|key, _, _| Ok(format!("https://cdn.example.com/{}", key)));

        let service = MediaManager::new(Some(Arc::new(storage)));
        let uploaded = service.upload_image(upload()).await.unwrap();

        assert!(uploaded.stored);
        assert!(uploaded.url.starts_with("https://cdn.example.com/"));
    }

    #[tokio::test]
    async fn test_upload_failure_falls_back_to_data_url() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_put_object()
            .returning(|_, _, _| Err(AppError::upstream("503 Service Unavailable")));

        let service = MediaManager::new(Some(Arc::new(storage)));
        let uploaded = service.upload_image(upload()).await.unwrap();

        assert!(!uploaded.stored);
        assert_eq!(uploaded.url, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn test_upload_without_storage() {
        let service = MediaManager::new(None);
        let uploaded = service.upload_image(upload()).await.unwrap();

        assert!(uploaded.url.starts_with("data:image/png;base64,"));
    }

    #[tokio::test]
    async fn test_upload_rejects_non_images() {
        let service = MediaManager::new(None);
        let result = service
            .upload_image(ImageUpload {
                content_type: "application/pdf".into(),
                ..upload()
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_skips_inline_images() {
        let mut storage = MockObjectStorage::new();
        storage.expect_delete_object().never();

        let service = MediaManager::new(Some(Arc::new(storage)));
        service.delete_image("data:image/png;base64,iVBORw==").await;
        service.delete_image("/placeholder.svg").await;
    }

    #[tokio::test]
    async fn test_delete_failure_is_swallowed() {
        let mut storage = MockObjectStorage::new();
        storage
            .expect_delete_object()
            .withf(|key| key == "1700000000000-abc123-pool.jpg")
            .returning(|_| Err(AppError::upstream("timeout")));

        let service = MediaManager::new(Some(Arc::new(storage)));
        service
            .delete_image("https://cdn.example.com/1700000000000-abc123-pool.jpg?v=2")
            .await;
    }
}
