//! Experience service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{ChangeEvent, Experience, ExperienceInput, ListFilter, TABLE_EXPERIENCES};

use crate::realtime::ChangeFeed;
use crate::repository::ExperienceRepository;

#[async_trait]
pub trait ExperienceService: Send + Sync {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Experience>>;

    async fn get(&self, id: Uuid) -> AppResult<Experience>;

    async fn create(&self, input: ExperienceInput) -> AppResult<Experience>;

    async fn update(&self, id: Uuid, input: ExperienceInput) -> AppResult<Experience>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct ExperienceManager {
    repo: Arc<dyn ExperienceRepository>,
    feed: ChangeFeed,
}

impl ExperienceManager {
    pub fn new(repo: Arc<dyn ExperienceRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl ExperienceService for ExperienceManager {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Experience>> {
        self.repo.list(filter).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Experience> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: ExperienceInput) -> AppResult<Experience> {
        let experience = Experience::create(input)?;
        let created = self.repo.insert(experience).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_EXPERIENCES, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: ExperienceInput) -> AppResult<Experience> {
        let mut experience = self.get(id).await?;
        experience.apply(input)?;

        let updated = self.repo.update(experience).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_EXPERIENCES, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed.publish(ChangeEvent::deleted(TABLE_EXPERIENCES, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockExperienceRepository;
    use common::AppError;
    use domain::ListInput;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_list_passes_filter() {
        let filter = ListFilter { featured: Some(true) };
        let mut repo = MockExperienceRepository::new();
        repo.expect_list().with(eq(filter)).returning(|_| Ok(vec![]));

        let service = ExperienceManager::new(Arc::new(repo), ChangeFeed::new(4));
        assert!(service.list(filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_with_blank_price_is_rejected() {
        let mut repo = MockExperienceRepository::new();
        repo.expect_insert().never();

        let service = ExperienceManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service
            .create(ExperienceInput {
                title: "Paragliding over Phewa".into(),
                description: "Tandem flight from Sarangkot".into(),
                duration: "30 minutes".into(),
                group_size: "1".into(),
                price: "   ".into(),
                highlights: ListInput::from(vec!["Annapurna views".to_string()]),
                category: "Adventure".into(),
                ..Default::default()
            })
            .await;

        match result {
            Err(AppError::Validation(message)) => assert!(message.contains("price")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
