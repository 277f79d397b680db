//! Journey service - journeys and their day-by-day schedules.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{
    ChangeEvent, Journey, JourneyDay, JourneyDayInput, JourneyInput, ListFilter, TABLE_ENQUIRIES,
    TABLE_JOURNEYS, TABLE_JOURNEY_DAYS,
};

use crate::realtime::ChangeFeed;
use crate::repository::JourneyRepository;

#[async_trait]
pub trait JourneyService: Send + Sync {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Journey>>;

    async fn get(&self, id: Uuid) -> AppResult<Journey>;

    async fn create(&self, input: JourneyInput) -> AppResult<Journey>;

    async fn update(&self, id: Uuid, input: JourneyInput) -> AppResult<Journey>;

    /// Delete a journey along with its days and enquiries
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn list_days(&self, journey_id: Uuid) -> AppResult<Vec<JourneyDay>>;

    /// Add a day; without a day number it goes after the last day
    async fn add_day(&self, journey_id: Uuid, input: JourneyDayInput) -> AppResult<JourneyDay>;

    async fn update_day(
        &self,
        journey_id: Uuid,
        day_id: Uuid,
        input: JourneyDayInput,
    ) -> AppResult<JourneyDay>;

    async fn delete_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<()>;
}

pub struct JourneyManager {
    repo: Arc<dyn JourneyRepository>,
    feed: ChangeFeed,
}

impl JourneyManager {
    pub fn new(repo: Arc<dyn JourneyRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl JourneyService for JourneyManager {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Journey>> {
        self.repo.list(filter).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Journey> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: JourneyInput) -> AppResult<Journey> {
        let journey = Journey::create(input)?;
        let created = self.repo.insert(journey).await?;
        self.feed.publish(ChangeEvent::inserted(TABLE_JOURNEYS, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: JourneyInput) -> AppResult<Journey> {
        let mut journey = self.get(id).await?;
        journey.apply(input)?;

        let updated = self.repo.update(journey).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_JOURNEYS, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let removed = self.repo.delete(id).await?;
        tracing::info!(
            %id,
            days = removed.day_ids.len(),
            enquiries = removed.enquiry_ids.len(),
            "Journey deleted with its days and enquiries"
        );

        for enquiry_id in removed.enquiry_ids {
            self.feed
                .publish(ChangeEvent::deleted(TABLE_ENQUIRIES, enquiry_id));
        }
        for day_id in removed.day_ids {
            self.feed
                .publish(ChangeEvent::deleted(TABLE_JOURNEY_DAYS, day_id));
        }
        self.feed.publish(ChangeEvent::deleted(TABLE_JOURNEYS, id));
        Ok(())
    }

    async fn list_days(&self, journey_id: Uuid) -> AppResult<Vec<JourneyDay>> {
        self.get(journey_id).await?;
        self.repo.list_days(journey_id).await
    }

    async fn add_day(&self, journey_id: Uuid, input: JourneyDayInput) -> AppResult<JourneyDay> {
        let existing = self.list_days(journey_id).await?;
        let day = JourneyDay::create(journey_id, input, &existing)?;

        let created = self.repo.insert_day(day).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_JOURNEY_DAYS, created.id));
        Ok(created)
    }

    async fn update_day(
        &self,
        journey_id: Uuid,
        day_id: Uuid,
        input: JourneyDayInput,
    ) -> AppResult<JourneyDay> {
        let mut day = self
            .repo
            .find_day(journey_id, day_id)
            .await?
            .ok_or_not_found()?;
        day.apply(input)?;

        let updated = self.repo.update_day(day).await?;
        self.feed
            .publish(ChangeEvent::updated(TABLE_JOURNEY_DAYS, day_id));
        Ok(updated)
    }

    async fn delete_day(&self, journey_id: Uuid, day_id: Uuid) -> AppResult<()> {
        self.repo.delete_day(journey_id, day_id).await?;
        self.feed
            .publish(ChangeEvent::deleted(TABLE_JOURNEY_DAYS, day_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockJourneyRepository, RemovedJourney};
    use common::AppError;
    use domain::ListInput;
    use mockall::predicate::eq;

    fn input() -> JourneyInput {
        JourneyInput {
            title: "Langtang Valley".into(),
            description: "Short trek north of Kathmandu".into(),
            duration: "8 days".into(),
            difficulty: "Easy".into(),
            activities: ListInput::from("Trekking, Monastery visit"),
            category: "Trekking".into(),
            ..Default::default()
        }
    }

    fn journey(id: Uuid) -> Journey {
        let mut journey = Journey::create(input()).unwrap();
        journey.id = id;
        journey
    }

    fn day(journey_id: Uuid, day_number: i32) -> JourneyDay {
        JourneyDay::create(
            journey_id,
            JourneyDayInput {
                day_number: Some(day_number),
                ..Default::default()
            },
            &[],
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_splits_activities() {
        let mut repo = MockJourneyRepository::new();
        repo.expect_insert().returning(Ok);

        let service = JourneyManager::new(Arc::new(repo), ChangeFeed::new(4));
        let created = service.create(input()).await.unwrap();

        assert_eq!(created.activities, vec!["Trekking", "Monastery visit"]);
    }

    #[tokio::test]
    async fn test_add_day_appends_after_last() {
        let journey_id = Uuid::new_v4();
        let mut repo = MockJourneyRepository::new();
        repo.expect_find_by_id()
            .with(eq(journey_id))
            .returning(|id| Ok(Some(journey(id))));
        repo.expect_list_days()
            .with(eq(journey_id))
            .returning(|id| Ok(vec![day(id, 1), day(id, 2)]));
        repo.expect_insert_day().returning(Ok);

        let service = JourneyManager::new(Arc::new(repo), ChangeFeed::new(4));
        let added = service
            .add_day(journey_id, JourneyDayInput::default())
            .await
            .unwrap();

        assert_eq!(added.day_number, 3);
        assert_eq!(added.journey_id, journey_id);
    }

    #[tokio::test]
    async fn test_days_of_missing_journey() {
        let mut repo = MockJourneyRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));
        repo.expect_list_days().never();

        let service = JourneyManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service.list_days(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_day_keeps_number_when_omitted() {
        let journey_id = Uuid::new_v4();
        let existing = day(journey_id, 4);
        let day_id = existing.id;

        let mut repo = MockJourneyRepository::new();
        repo.expect_find_day()
            .with(eq(journey_id), eq(day_id))
            .returning(move |_, _| Ok(Some(existing.clone())));
        repo.expect_update_day().returning(Ok);

        let service = JourneyManager::new(Arc::new(repo), ChangeFeed::new(4));
        let updated = service
            .update_day(
                journey_id,
                day_id,
                JourneyDayInput {
                    title: Some("Kyanjin Gompa".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.day_number, 4);
        assert_eq!(updated.title.as_deref(), Some("Kyanjin Gompa"));
    }

    #[tokio::test]
    async fn test_delete_publishes_event() {
        let id = Uuid::new_v4();
        let mut repo = MockJourneyRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .returning(|_| Ok(RemovedJourney::default()));

        let feed = ChangeFeed::new(4);
        let mut events = feed.subscribe();
        let service = JourneyManager::new(Arc::new(repo), feed);

        service.delete(id).await.unwrap();

        let event = events.try_recv().unwrap();
        assert_eq!(event.table, TABLE_JOURNEYS);
        assert_eq!(event.kind, domain::ChangeKind::Delete);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_delete_publishes_cascaded_rows() {
        let id = Uuid::new_v4();
        let enquiry_id = Uuid::new_v4();
        let day_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        let removed = RemovedJourney {
            enquiry_ids: vec![enquiry_id],
            day_ids: day_ids.clone(),
        };

        let mut repo = MockJourneyRepository::new();
        repo.expect_delete()
            .with(eq(id))
            .returning(move |_| Ok(removed.clone()));

        let feed = ChangeFeed::new(8);
        let mut events = feed.subscribe();
        let service = JourneyManager::new(Arc::new(repo), feed);

        service.delete(id).await.unwrap();

        let published: Vec<(String, Uuid)> = std::iter::from_fn(|| events.try_recv().ok())
            .inspect(|event| assert_eq!(event.kind, domain::ChangeKind::Delete))
            .map(|event| (event.table, event.id))
            .collect();

        assert_eq!(
            published,
            vec![
                (TABLE_ENQUIRIES.to_string(), enquiry_id),
                (TABLE_JOURNEY_DAYS.to_string(), day_ids[0]),
                (TABLE_JOURNEY_DAYS.to_string(), day_ids[1]),
                (TABLE_JOURNEYS.to_string(), id),
            ]
        );
    }
}
