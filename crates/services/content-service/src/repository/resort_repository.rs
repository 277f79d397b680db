//! Resort activity, package and gallery repositories.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use super::entities::{gallery_item, resort_activity, resort_package};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::{GalleryItem, ResortActivity, ResortPackage};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

// =============================================================================
// Activities
// =============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ResortActivityRepository: Send + Sync {
    /// List activities, oldest first
    async fn list(&self) -> AppResult<Vec<ResortActivity>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResortActivity>>;

    async fn insert(&self, activity: ResortActivity) -> AppResult<ResortActivity>;

    async fn update(&self, activity: ResortActivity) -> AppResult<ResortActivity>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ResortActivityStore {
    db: DatabaseConnection,
}

impl ResortActivityStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResortActivityRepository for ResortActivityStore {
    async fn list(&self) -> AppResult<Vec<ResortActivity>> {
        let models = resort_activity::Entity::find()
            .order_by_asc(resort_activity::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ResortActivity::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResortActivity>> {
        let result = resort_activity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ResortActivity::from))
    }

    async fn insert(&self, activity: ResortActivity) -> AppResult<ResortActivity> {
        let model = resort_activity::ActiveModel::from(activity)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Activity"))?;

        Ok(ResortActivity::from(model))
    }

    async fn update(&self, activity: ResortActivity) -> AppResult<ResortActivity> {
        let model = resort_activity::ActiveModel::from(activity)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Activity"))?;

        Ok(ResortActivity::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = resort_activity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}

// =============================================================================
// Packages
// =============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ResortPackageRepository: Send + Sync {
    /// List packages, oldest first
    async fn list(&self) -> AppResult<Vec<ResortPackage>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResortPackage>>;

    async fn insert(&self, package: ResortPackage) -> AppResult<ResortPackage>;

    async fn update(&self, package: ResortPackage) -> AppResult<ResortPackage>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ResortPackageStore {
    db: DatabaseConnection,
}

impl ResortPackageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResortPackageRepository for ResortPackageStore {
    async fn list(&self) -> AppResult<Vec<ResortPackage>> {
        let models = resort_package::Entity::find()
            .order_by_asc(resort_package::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(ResortPackage::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<ResortPackage>> {
        let result = resort_package::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(ResortPackage::from))
    }

    async fn insert(&self, package: ResortPackage) -> AppResult<ResortPackage> {
        let model = resort_package::ActiveModel::from(package)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Resort package"))?;

        Ok(ResortPackage::from(model))
    }

    async fn update(&self, package: ResortPackage) -> AppResult<ResortPackage> {
        let model = resort_package::ActiveModel::from(package)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Resort package"))?;

        Ok(ResortPackage::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = resort_package::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}

// =============================================================================
// Gallery
// =============================================================================

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GalleryRepository: Send + Sync {
    /// List images by display order
    async fn list(&self) -> AppResult<Vec<GalleryItem>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GalleryItem>>;

    async fn insert(&self, item: GalleryItem) -> AppResult<GalleryItem>;

    async fn update(&self, item: GalleryItem) -> AppResult<GalleryItem>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct GalleryStore {
    db: DatabaseConnection,
}

impl GalleryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GalleryRepository for GalleryStore {
    async fn list(&self) -> AppResult<Vec<GalleryItem>> {
        let models = gallery_item::Entity::find()
            .order_by_asc(gallery_item::Column::DisplayOrder)
            .order_by_asc(gallery_item::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(GalleryItem::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<GalleryItem>> {
        let result = gallery_item::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(GalleryItem::from))
    }

    async fn insert(&self, item: GalleryItem) -> AppResult<GalleryItem> {
        let model = gallery_item::ActiveModel::from(item)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Gallery image"))?;

        Ok(GalleryItem::from(model))
    }

    async fn update(&self, item: GalleryItem) -> AppResult<GalleryItem> {
        let model = gallery_item::ActiveModel::from(item)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Gallery image"))?;

        Ok(GalleryItem::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = gallery_item::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
