//! Destination service - slug-checked destination writes and nested item edits.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    ChangeEvent, Destination, DestinationInput, ListFilter, NestedCollection, TABLE_DESTINATIONS,
};

use crate::realtime::ChangeFeed;
use crate::repository::DestinationRepository;

/// Ids assigned to appended items, with the saved destination
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AppendedItems {
    pub ids: Vec<String>,
    pub destination: Destination,
}

#[async_trait]
pub trait DestinationService: Send + Sync {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Destination>>;

    async fn get(&self, id: Uuid) -> AppResult<Destination>;

    async fn get_by_slug(&self, slug: &str) -> AppResult<Destination>;

    /// Create a destination; the slug must not be used by another destination
    async fn create(&self, input: DestinationInput) -> AppResult<Destination>;

    /// Replace a destination's fields; the slug must not be used by another destination
    async fn update(&self, id: Uuid, input: DestinationInput) -> AppResult<Destination>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Add generated or hand-written items to one nested collection
    async fn append_items(
        &self,
        id: Uuid,
        collection: NestedCollection,
        items: Vec<Value>,
    ) -> AppResult<AppendedItems>;
}

pub struct DestinationManager {
    repo: Arc<dyn DestinationRepository>,
    feed: ChangeFeed,
}

impl DestinationManager {
    pub fn new(repo: Arc<dyn DestinationRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }

    async fn ensure_slug_available(
        &self,
        slug: Option<&str>,
        exclude: Option<Uuid>,
    ) -> AppResult<()> {
        let Some(slug) = slug else {
            return Ok(());
        };

        if self.repo.slug_taken(slug, exclude).await? {
            return Err(AppError::conflict("Slug"));
        }
        Ok(())
    }
}

#[async_trait]
impl DestinationService for DestinationManager {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Destination>> {
        self.repo.list(filter).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Destination> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_by_slug(&self, slug: &str) -> AppResult<Destination> {
        self.repo.find_by_slug(slug).await?.ok_or_not_found()
    }

    async fn create(&self, input: DestinationInput) -> AppResult<Destination> {
        let destination = Destination::create(input)?;
        self.ensure_slug_available(destination.slug.as_deref(), None)
            .await?;

        let created = self.repo.insert(destination).await?;
        tracing::info!(id = %created.id, slug = ?created.slug, "Destination created");
        self.feed
            .publish(ChangeEvent::inserted(TABLE_DESTINATIONS, created.id));

        Ok(created)
    }

    async fn update(&self, id: Uuid, input: DestinationInput) -> AppResult<Destination> {
        let mut destination = self.get(id).await?;
        destination.apply(input)?;
        self.ensure_slug_available(destination.slug.as_deref(), Some(id))
            .await?;

        let updated = self.repo.update(destination).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_DESTINATIONS, id));

        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed.publish(ChangeEvent::deleted(TABLE_DESTINATIONS, id));
        Ok(())
    }

    async fn append_items(
        &self,
        id: Uuid,
        collection: NestedCollection,
        items: Vec<Value>,
    ) -> AppResult<AppendedItems> {
        if items.is_empty() {
            return Err(AppError::validation("No items to add"));
        }

        let mut destination = self.get(id).await?;
        let ids = destination.append_to(collection, items)?;

        let destination = self.repo.update(destination).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_DESTINATIONS, id));

        Ok(AppendedItems { ids, destination })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockDestinationRepository;
    use mockall::predicate::eq;
    use serde_json::json;

    fn input(name: &str) -> DestinationInput {
        DestinationInput {
            name: name.into(),
            description: "Classic circuit around the massif".into(),
            duration: "14 days".into(),
            difficulty: "Moderate".into(),
            best_time: "October".into(),
            category: "Trekking".into(),
            ..Default::default()
        }
    }

    fn existing(id: Uuid) -> Destination {
        let mut destination = Destination::create(input("Annapurna Circuit")).unwrap();
        destination.id = id;
        destination
    }

    // =========================================================================
    // Create
    // =========================================================================

    #[tokio::test]
    async fn test_create_derives_slug_from_name() {
        let mut repo = MockDestinationRepository::new();
        repo.expect_slug_taken()
            .with(eq("annapurna-circuit"), eq(None::<Uuid>))
            .returning(|_, _| Ok(false));
        repo.expect_insert().returning(Ok);

        let feed = ChangeFeed::new(4);
        let mut events = feed.subscribe();
        let service = DestinationManager::new(Arc::new(repo), feed);

        let created = service.create(input("Annapurna Circuit")).await.unwrap();

        assert_eq!(created.slug.as_deref(), Some("annapurna-circuit"));
        let event = events.try_recv().unwrap();
        assert_eq!(event.table, TABLE_DESTINATIONS);
        assert_eq!(event.id, created.id);
    }

    #[tokio::test]
    async fn test_create_rejects_taken_slug_before_write() {
        let mut repo = MockDestinationRepository::new();
        repo.expect_slug_taken().returning(|_, _| Ok(true));
        repo.expect_insert().never();

        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service.create(input("Annapurna Circuit")).await;

        assert!(matches!(result, Err(AppError::Conflict(ref e)) if e == "Slug"));
    }

    #[tokio::test]
    async fn test_create_requires_fields() {
        let mut repo = MockDestinationRepository::new();
        repo.expect_insert().never();

        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service
            .create(DestinationInput {
                name: "Mustang".into(),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    // =========================================================================
    // Update
    // =========================================================================

    #[tokio::test]
    async fn test_update_excludes_own_slug() {
        let id = Uuid::new_v4();
        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(move |id| Ok(Some(existing(id))));
        repo.expect_slug_taken()
            .with(eq("annapurna-circuit"), eq(Some(id)))
            .returning(|_, _| Ok(false));
        repo.expect_update().returning(Ok);

        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));
        let mut update = input("Annapurna Circuit");
        update.featured = true;

        let updated = service.update(id, update).await.unwrap();
        assert!(updated.featured);
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn test_update_missing_destination() {
        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service.update(Uuid::new_v4(), input("Manaslu")).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    // =========================================================================
    // Nested items
    // =========================================================================

    #[tokio::test]
    async fn test_append_items_assigns_ids() {
        let id = Uuid::new_v4();
        let mut repo = MockDestinationRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(existing(id))));
        repo.expect_update().returning(Ok);

        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service
            .append_items(
                id,
                NestedCollection::Faqs,
                vec![json!({"question": "Permits?", "answer": "ACAP and TIMS"})],
            )
            .await
            .unwrap();

        assert_eq!(result.ids.len(), 1);
        let faq = &result.destination.faqs[&result.ids[0]];
        assert_eq!(faq["question"], "Permits?");
        assert_eq!(faq["id"], result.ids[0].as_str());
    }

    #[tokio::test]
    async fn test_append_nothing_is_rejected() {
        let repo = MockDestinationRepository::new();
        let service = DestinationManager::new(Arc::new(repo), ChangeFeed::new(4));

        let result = service
            .append_items(Uuid::new_v4(), NestedCollection::Itinerary, vec![])
            .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
