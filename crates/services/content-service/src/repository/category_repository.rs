//! Category repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use uuid::Uuid;

use super::entities::category::{self, ActiveModel, Entity as CategoryEntity};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::Category;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// List categories in creation order
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn name_taken(&self, name: &str) -> AppResult<bool>;

    async fn insert(&self, category: Category) -> AppResult<Category>;

    /// Insert several categories in one statement
    async fn insert_many(&self, categories: Vec<Category>) -> AppResult<()>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct CategoryStore {
    db: DatabaseConnection,
}

impl CategoryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for CategoryStore {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .order_by_asc(category::Column::CreatedAt)
            .order_by_asc(category::Column::Name)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn name_taken(&self, name: &str) -> AppResult<bool> {
        let count = CategoryEntity::find()
            .filter(category::Column::Name.eq(name))
            .count(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(count > 0)
    }

    async fn insert(&self, category: Category) -> AppResult<Category> {
        let model = ActiveModel::from(category)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Category"))?;

        Ok(Category::from(model))
    }

    async fn insert_many(&self, categories: Vec<Category>) -> AppResult<()> {
        if categories.is_empty() {
            return Ok(());
        }

        CategoryEntity::insert_many(categories.into_iter().map(ActiveModel::from))
            .exec(&self.db)
            .await
            .map_err(|e| write_error(e, "Category"))?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = CategoryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
