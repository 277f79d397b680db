//! Enquiry repository.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder};
use uuid::Uuid;

use super::entities::enquiry::{self, ActiveModel, Entity as EnquiryEntity};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::Enquiry;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnquiryRepository: Send + Sync {
    /// List enquiries, newest first
    async fn list(&self) -> AppResult<Vec<Enquiry>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Enquiry>>;

    async fn insert(&self, enquiry: Enquiry) -> AppResult<Enquiry>;

    async fn update(&self, enquiry: Enquiry) -> AppResult<Enquiry>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct EnquiryStore {
    db: DatabaseConnection,
}

impl EnquiryStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnquiryRepository for EnquiryStore {
    async fn list(&self) -> AppResult<Vec<Enquiry>> {
        let models = EnquiryEntity::find()
            .order_by_desc(enquiry::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Enquiry::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Enquiry>> {
        let result = EnquiryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Enquiry::from))
    }

    async fn insert(&self, enquiry: Enquiry) -> AppResult<Enquiry> {
        let model = ActiveModel::from(enquiry)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Enquiry"))?;

        Ok(Enquiry::from(model))
    }

    async fn update(&self, enquiry: Enquiry) -> AppResult<Enquiry> {
        let model = ActiveModel::from(enquiry)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Enquiry"))?;

        Ok(Enquiry::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = EnquiryEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
