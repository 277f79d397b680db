//! Destination repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use super::entities::destination::{self, ActiveModel, Entity as DestinationEntity};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::{Destination, ListFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Destination repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DestinationRepository: Send + Sync {
    /// List destinations, newest first
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Destination>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Destination>>;

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Destination>>;

    /// Whether a destination other than `exclude` already uses `slug`
    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> AppResult<bool>;

    async fn insert(&self, destination: Destination) -> AppResult<Destination>;

    /// Overwrite every column of an existing destination
    async fn update(&self, destination: Destination) -> AppResult<Destination>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// SeaORM-backed destination repository
pub struct DestinationStore {
    db: DatabaseConnection,
}

impl DestinationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DestinationRepository for DestinationStore {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Destination>> {
        let mut query = DestinationEntity::find();
        if let Some(featured) = filter.featured {
            query = query.filter(destination::Column::Featured.eq(featured));
        }

        let models = query
            .order_by_desc(destination::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Destination::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Destination>> {
        let result = DestinationEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Destination::from))
    }

    async fn find_by_slug(&self, slug: &str) -> AppResult<Option<Destination>> {
        let result = DestinationEntity::find()
            .filter(destination::Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Destination::from))
    }

    async fn slug_taken(&self, slug: &str, exclude: Option<Uuid>) -> AppResult<bool> {
        let mut query = DestinationEntity::find().filter(destination::Column::Slug.eq(slug));
        if let Some(id) = exclude {
            query = query.filter(destination::Column::Id.ne(id));
        }

        let count = query.count(&self.db).await.map_err(AppError::from)?;
        Ok(count > 0)
    }

    async fn insert(&self, destination: Destination) -> AppResult<Destination> {
        let model = ActiveModel::from(destination)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Slug"))?;

        Ok(Destination::from(model))
    }

    async fn update(&self, destination: Destination) -> AppResult<Destination> {
        let model = ActiveModel::from(destination)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Slug"))?;

        Ok(Destination::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = DestinationEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
