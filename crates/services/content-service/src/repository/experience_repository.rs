//! Experience repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use super::entities::experience::{self, ActiveModel, Entity as ExperienceEntity};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::{Experience, ListFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Experience>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Experience>>;

    async fn insert(&self, experience: Experience) -> AppResult<Experience>;

    async fn update(&self, experience: Experience) -> AppResult<Experience>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ExperienceStore {
    db: DatabaseConnection,
}

impl ExperienceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceStore {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Experience>> {
        let mut query = ExperienceEntity::find();
        if let Some(featured) = filter.featured {
            query = query.filter(experience::Column::Featured.eq(featured));
        }

        let models = query
            .order_by_desc(experience::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Experience::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Experience>> {
        let result = ExperienceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Experience::from))
    }

    async fn insert(&self, experience: Experience) -> AppResult<Experience> {
        let model = ActiveModel::from(experience)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Experience"))?;

        Ok(Experience::from(model))
    }

    async fn update(&self, experience: Experience) -> AppResult<Experience> {
        let model = ActiveModel::from(experience)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Experience"))?;

        Ok(Experience::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = ExperienceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
