//! Enquiry service - public submissions and admin triage.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{ChangeEvent, Enquiry, EnquiryInput, EnquiryUpdate, TABLE_ENQUIRIES};

use crate::realtime::ChangeFeed;
use crate::repository::EnquiryRepository;

#[async_trait]
pub trait EnquiryService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Enquiry>>;

    async fn get(&self, id: Uuid) -> AppResult<Enquiry>;

    /// Record a visitor enquiry as new and unread
    async fn submit(&self, input: EnquiryInput) -> AppResult<Enquiry>;

    /// Change the read flag or status
    async fn update(&self, id: Uuid, update: EnquiryUpdate) -> AppResult<Enquiry>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct EnquiryManager {
    repo: Arc<dyn EnquiryRepository>,
    feed: ChangeFeed,
}

impl EnquiryManager {
    pub fn new(repo: Arc<dyn EnquiryRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl EnquiryService for EnquiryManager {
    async fn list(&self) -> AppResult<Vec<Enquiry>> {
        self.repo.list().await
    }

    async fn get(&self, id: Uuid) -> AppResult<Enquiry> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn submit(&self, input: EnquiryInput) -> AppResult<Enquiry> {
        let enquiry = Enquiry::create(input)?;
        let created = self.repo.insert(enquiry).await?;
        tracing::info!(id = %created.id, journey = %created.journey_title, "Enquiry received");
        self.feed
            .publish(ChangeEvent::inserted(TABLE_ENQUIRIES, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, update: EnquiryUpdate) -> AppResult<Enquiry> {
        let mut enquiry = self.get(id).await?;
        enquiry.apply(update)?;

        let updated = self.repo.update(enquiry).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_ENQUIRIES, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed.publish(ChangeEvent::deleted(TABLE_ENQUIRIES, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockEnquiryRepository;
    use common::AppError;
    use mockall::predicate::eq;

    fn input() -> EnquiryInput {
        EnquiryInput {
            journey_id: None,
            journey_title: "Upper Mustang".into(),
            name: "Lena".into(),
            email: "lena@example.com".into(),
            message: Some("Is October too cold?".into()),
        }
    }

    #[tokio::test]
    async fn test_submit_starts_new_and_unread() {
        let mut repo = MockEnquiryRepository::new();
        repo.expect_insert().returning(Ok);

        let service = EnquiryManager::new(Arc::new(repo), ChangeFeed::new(4));
        let enquiry = service.submit(input()).await.unwrap();

        assert_eq!(enquiry.status, "new");
        assert!(!enquiry.is_read);
    }

    #[tokio::test]
    async fn test_mark_read() {
        let id = Uuid::new_v4();
        let mut repo = MockEnquiryRepository::new();
        repo.expect_find_by_id().with(eq(id)).returning(|id| {
            let mut enquiry = Enquiry::create(input()).unwrap();
            enquiry.id = id;
            Ok(Some(enquiry))
        });
        repo.expect_update().returning(Ok);

        let service = EnquiryManager::new(Arc::new(repo), ChangeFeed::new(4));
        let updated = service
            .update(
                id,
                EnquiryUpdate {
                    is_read: Some(true),
                    status: None,
                },
            )
            .await
            .unwrap();

        assert!(updated.is_read);
        assert_eq!(updated.status, "new");
    }

    #[tokio::test]
    async fn test_unknown_status_is_rejected() {
        let mut repo = MockEnquiryRepository::new();
        repo.expect_find_by_id()
            .returning(|_| Ok(Some(Enquiry::create(input()).unwrap())));
        repo.expect_update().never();

        let service = EnquiryManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service
            .update(
                Uuid::new_v4(),
                EnquiryUpdate {
                    is_read: None,
                    status: Some("spam".into()),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
