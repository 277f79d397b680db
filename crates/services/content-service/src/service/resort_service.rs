//! Resort services - activities, packages and the gallery.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{
    ChangeEvent, GalleryItem, GalleryItemInput, ResortActivity, ResortActivityInput,
    ResortPackage, ResortPackageInput, TABLE_RESORT_ACTIVITIES, TABLE_RESORT_GALLERY,
    TABLE_RESORT_PACKAGES,
};

use super::MediaService;
use crate::realtime::ChangeFeed;
use crate::repository::{GalleryRepository, ResortActivityRepository, ResortPackageRepository};

// =============================================================================
// Activities
// =============================================================================

#[async_trait]
pub trait ResortActivityService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ResortActivity>>;

    async fn get(&self, id: Uuid) -> AppResult<ResortActivity>;

    async fn create(&self, input: ResortActivityInput) -> AppResult<ResortActivity>;

    async fn update(&self, id: Uuid, input: ResortActivityInput) -> AppResult<ResortActivity>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ResortActivityManager {
    repo: Arc<dyn ResortActivityRepository>,
    feed: ChangeFeed,
}

impl ResortActivityManager {
    pub fn new(repo: Arc<dyn ResortActivityRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl ResortActivityService for ResortActivityManager {
    async fn list(&self) -> AppResult<Vec<ResortActivity>> {
        self.repo.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<ResortActivity> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: ResortActivityInput) -> AppResult<ResortActivity> {
        let activity = ResortActivity::create(input)?;
        let created = self.repo.insert(activity).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_RESORT_ACTIVITIES, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: ResortActivityInput) -> AppResult<ResortActivity> {
        let mut activity = self.get(id).await?;
        activity.apply(input)?;

        let updated = self.repo.update(activity).await?;
        self.feed
            .publish(ChangeEvent::updated(TABLE_RESORT_ACTIVITIES, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed
            .publish(ChangeEvent::deleted(TABLE_RESORT_ACTIVITIES, id));
        Ok(())
    }
}

// =============================================================================
// Packages
// =============================================================================

#[async_trait]
pub trait ResortPackageService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<ResortPackage>>;

    async fn get(&self, id: Uuid) -> AppResult<ResortPackage>;

    async fn create(&self, input: ResortPackageInput) -> AppResult<ResortPackage>;

    async fn update(&self, id: Uuid, input: ResortPackageInput) -> AppResult<ResortPackage>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ResortPackageManager {
    repo: Arc<dyn ResortPackageRepository>,
    feed: ChangeFeed,
}

impl ResortPackageManager {
    pub fn new(repo: Arc<dyn ResortPackageRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl ResortPackageService for ResortPackageManager {
    async fn list(&self) -> AppResult<Vec<ResortPackage>> {
        self.repo.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<ResortPackage> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: ResortPackageInput) -> AppResult<ResortPackage> {
        let package = ResortPackage::create(input)?;
        let created = self.repo.insert(package).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_RESORT_PACKAGES, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: ResortPackageInput) -> AppResult<ResortPackage> {
        let mut package = self.get(id).await?;
        package.apply(input)?;

        let updated = self.repo.update(package).await?;
        self.feed
            .publish(ChangeEvent::updated(TABLE_RESORT_PACKAGES, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed
            .publish(ChangeEvent::deleted(TABLE_RESORT_PACKAGES, id));
        Ok(())
    }
}

// =============================================================================
// Gallery
// =============================================================================

#[async_trait]
pub trait GalleryService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<GalleryItem>>;

    async fn get(&self, id: Uuid) -> AppResult<GalleryItem>;

    async fn create(&self, input: GalleryItemInput) -> AppResult<GalleryItem>;

    async fn update(&self, id: Uuid, input: GalleryItemInput) -> AppResult<GalleryItem>;

    /// Delete the entry and, best effort, its stored image
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct GalleryManager {
    repo: Arc<dyn GalleryRepository>,
    media: Arc<dyn MediaService>,
    feed: ChangeFeed,
}

impl GalleryManager {
    pub fn new(
        repo: Arc<dyn GalleryRepository>,
        media: Arc<dyn MediaService>,
        feed: ChangeFeed,
    ) -> Self {
        Self { repo, media, feed }
    }
}

#[async_trait]
impl GalleryService for GalleryManager {
    async fn list(&self) -> AppResult<Vec<GalleryItem>> {
        self.repo.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<GalleryItem> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: GalleryItemInput) -> AppResult<GalleryItem> {
        let item = GalleryItem::create(input)?;
        let created = self.repo.insert(item).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_RESORT_GALLERY, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: GalleryItemInput) -> AppResult<GalleryItem> {
        let mut item = self.get(id).await?;
        item.apply(input)?;

        let updated = self.repo.update(item).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_RESORT_GALLERY, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let item = self.get(id).await?;
        self.repo.delete(id).await?;
        self.media.delete_image(&item.image_url).await;

        self.feed.publish(ChangeEvent::deleted(TABLE_RESORT_GALLERY, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{
        MockGalleryRepository, MockResortActivityRepository, MockResortPackageRepository,
    };
    use crate::service::{ImageUpload, UploadedImage};
    use domain::DEFAULT_ACTIVITY_ICON;
    use mockall::predicate::eq;
    use std::sync::Mutex;

    /// Records which image URLs were deleted
    #[derive(Default)]
    struct RecordingMedia {
        deleted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl MediaService for RecordingMedia {
        async fn upload_image(&self, _upload: ImageUpload) -> AppResult<UploadedImage> {
            unimplemented!("not used by gallery tests")
        }

        async fn delete_image(&self, url: &str) {
            self.deleted.lock().unwrap().push(url.to_string());
        }
    }

    #[tokio::test]
    async fn test_activity_icon_defaults() {
        let mut repo = MockResortActivityRepository::new();
        repo.expect_insert().returning(Ok);

        let service = ResortActivityManager::new(Arc::new(repo), ChangeFeed::new(4));
        let created = service
            .create(ResortActivityInput {
                title: "Kayaking".into(),
                description: "Morning paddle".into(),
                full_description: "Two hours on the lake with a guide".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.icon, DEFAULT_ACTIVITY_ICON);
    }

    #[tokio::test]
    async fn test_resort_package_lines() {
        let mut repo = MockResortPackageRepository::new();
        repo.expect_insert().returning(Ok);

        let service = ResortPackageManager::new(Arc::new(repo), ChangeFeed::new(4));
        let created = service
            .create(ResortPackageInput {
                name: "Lakeside Escape".into(),
                duration: "3 nights".into(),
                price: "$450".into(),
                original_price: "$520".into(),
                description: "Lake view suite".into(),
                includes: "Breakfast\n\nAirport transfer\n".into(),
                features: "Spa access".into(),
                badge: "Popular".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.includes, vec!["Breakfast", "Airport transfer"]);
        assert_eq!(created.features, vec!["Spa access"]);
    }

    #[tokio::test]
    async fn test_gallery_delete_removes_stored_image() {
        let id = Uuid::new_v4();
        let mut repo = MockGalleryRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|id| {
            let mut item = GalleryItem::create(GalleryItemInput {
                image_url: "https://cdn.example.com/1700000000000-abc123-pool.jpg".into(),
                ..Default::default()
            })
            .unwrap();
            item.id = id;
            Ok(Some(item))
        });
        repo.expect_delete().with(eq(id)).returning(|_| Ok(()));

        let media = Arc::new(RecordingMedia::default());
        let service = GalleryManager::new(Arc::new(repo), media.clone(), ChangeFeed::new(4));

        service.delete(id).await.unwrap();

        assert_eq!(
            *media.deleted.lock().unwrap(),
            vec!["https://cdn.example.com/1700000000000-abc123-pool.jpg".to_string()]
        );
    }
}
