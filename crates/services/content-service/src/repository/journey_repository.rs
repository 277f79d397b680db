//! Journey repository, including each journey's day schedule.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};
use uuid::Uuid;

use super::entities::journey::{self, ActiveModel, Entity as JourneyEntity};
use super::entities::{enquiry, journey_day};
use super::{ensure_deleted, write_error};
use common::{AppError, AppResult};
use domain::{Journey, JourneyDay, ListFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Rows removed along with a journey
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemovedJourney {
    pub enquiry_ids: Vec<Uuid>,
    pub day_ids: Vec<Uuid>,
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait JourneyRepository: Send + Sync {
    /// List journeys, newest first
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Journey>>;

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Journey>>;

    async fn insert(&self, journey: Journey) -> AppResult<Journey>;

    async fn update(&self, journey: Journey) -> AppResult<Journey>;

    /// Delete a journey together with its enquiries and days
    async fn delete(&self, id: Uuid) -> AppResult<RemovedJourney>;

    /// Days of a journey ordered by day number
    async fn list_days(&self, journey_id: Uuid) -> AppResult<Vec<JourneyDay>>;

    async fn find_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<Option<JourneyDay>>;

    async fn insert_day(&self, day: JourneyDay) -> AppResult<JourneyDay>;

    async fn update_day(&self, day: JourneyDay) -> AppResult<JourneyDay>;

    async fn delete_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<()>;
}

pub struct JourneyStore {
    db: DatabaseConnection,
}

impl JourneyStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl JourneyRepository for JourneyStore {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Journey>> {
        let mut query = JourneyEntity::find();
        if let Some(featured) = filter.featured {
            query = query.filter(journey::Column::Featured.eq(featured));
        }

        let models = query
            .order_by_desc(journey::Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Journey::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Journey>> {
        let result = JourneyEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Journey::from))
    }

    async fn insert(&self, journey: Journey) -> AppResult<Journey> {
        let model = ActiveModel::from(journey)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Journey"))?;

        Ok(Journey::from(model))
    }

    async fn update(&self, journey: Journey) -> AppResult<Journey> {
        let model = ActiveModel::from(journey)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Journey"))?;

        Ok(Journey::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<RemovedJourney> {
        let txn = self.db.begin().await.map_err(AppError::from)?;

        let enquiry_ids: Vec<Uuid> = enquiry::Entity::find()
            .select_only()
            .column(enquiry::Column::Id)
            .filter(enquiry::Column::JourneyId.eq(id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(AppError::from)?;

        let day_ids: Vec<Uuid> = journey_day::Entity::find()
            .select_only()
            .column(journey_day::Column::Id)
            .filter(journey_day::Column::JourneyId.eq(id))
            .into_tuple()
            .all(&txn)
            .await
            .map_err(AppError::from)?;

        enquiry::Entity::delete_many()
            .filter(enquiry::Column::JourneyId.eq(id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        journey_day::Entity::delete_many()
            .filter(journey_day::Column::JourneyId.eq(id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        let result = JourneyEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        // Dropping the transaction rolls back the related deletes
        ensure_deleted(result)?;

        txn.commit().await.map_err(AppError::from)?;
        Ok(RemovedJourney {
            enquiry_ids,
            day_ids,
        })
    }

    async fn list_days(&self, journey_id: Uuid) -> AppResult<Vec<JourneyDay>> {
        let models = journey_day::Entity::find()
            .filter(journey_day::Column::JourneyId.eq(journey_id))
            .order_by_asc(journey_day::Column::DayNumber)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(JourneyDay::from).collect())
    }

    async fn find_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<Option<JourneyDay>> {
        let result = journey_day::Entity::find_by_id(day_id)
            .filter(journey_day::Column::JourneyId.eq(journey_id))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(JourneyDay::from))
    }

    async fn insert_day(&self, day: JourneyDay) -> AppResult<JourneyDay> {
        let model = journey_day::ActiveModel::from(day)
            .insert(&self.db)
            .await
            .map_err(|e| write_error(e, "Journey day"))?;

        Ok(JourneyDay::from(model))
    }

    async fn update_day(&self, day: JourneyDay) -> AppResult<JourneyDay> {
        let model = journey_day::ActiveModel::from(day)
            .update(&self.db)
            .await
            .map_err(|e| write_error(e, "Journey day"))?;

        Ok(JourneyDay::from(model))
    }

    async fn delete_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<()> {
        let result = journey_day::Entity::delete_many()
            .filter(journey_day::Column::Id.eq(day_id))
            .filter(journey_day::Column::JourneyId.eq(journey_id))
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        ensure_deleted(result)
    }
}
