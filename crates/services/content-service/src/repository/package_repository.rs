//! Package (blog post) repository.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use super::entities::package::{self, ActiveModel, Entity as PackageEntity};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::{ListFilter, Package};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// List posts, newest first
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Package>>;

    /// Most recently published posts
    async fn recent(&self, limit: u64) -> AppResult<Vec<Package>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>>;

    async fn insert(&self, package: Package) -> AppResult<Package>;

    async fn update(&self, package: Package) -> AppResult<Package>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Add one view in a single statement
    async fn increment_views(&self, id: Uuid) -> AppResult<()>;
}

pub struct PackageStore {
    db: DatabaseConnection,
}

impl PackageStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PackageRepository for PackageStore {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Package>> {
        let mut query = PackageEntity::find();
        if let Some(featured) = filter.featured {
            query = query.filter(package::Column::Featured.eq(featured));
        }

        let models = query
            .order_by_desc(package::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Package::from).collect())
    }

    async fn recent(&self, limit: u64) -> AppResult<Vec<Package>> {
        let models = PackageEntity::find()
            .order_by_desc(package::Column::PublishedDate)
            .order_by_desc(package::Column::CreatedAt)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Package::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Package>> {
        let result = PackageEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Package::from))
    }

    async fn insert(&self, package: Package) -> AppResult<Package> {
        let model = ActiveModel::from(package)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Package"))?;

        Ok(Package::from(model))
    }

    async fn update(&self, package: Package) -> AppResult<Package> {
        let model = ActiveModel::from(package)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Package"))?;

        Ok(Package::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = PackageEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }

    async fn increment_views(&self, id: Uuid) -> AppResult<()> {
        let result = PackageEntity::update_many()
            .col_expr(package::Column::Views, Expr::col(package::Column::Views).add(1))
            .filter(package::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}
