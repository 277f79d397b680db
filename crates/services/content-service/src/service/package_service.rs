//! Package service - blog posts, the recent feed and view counting.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{ChangeEvent, ListFilter, Package, PackageInput, RecentQuery, TABLE_PACKAGES};

use crate::realtime::ChangeFeed;
use crate::repository::PackageRepository;

#[async_trait]
pub trait PackageService: Send + Sync {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Package>>;

    /// Most recently published posts
    async fn recent(&self, query: RecentQuery) -> AppResult<Vec<Package>>;

    async fn get(&self, id: Uuid) -> AppResult<Package>;

    async fn create(&self, input: PackageInput) -> AppResult<Package>;

    /// Replace a post's fields; the view count is kept
    async fn update(&self, id: Uuid, input: PackageInput) -> AppResult<Package>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Count one view and return the post
    async fn record_view(&self, id: Uuid) -> AppResult<Package>;
}

pub struct PackageManager {
    repo: Arc<dyn PackageRepository>,
    feed: ChangeFeed,
}

impl PackageManager {
    pub fn new(repo: Arc<dyn PackageRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl PackageService for PackageManager {
    async fn list(&self, filter: ListFilter) -> AppResult<Vec<Package>> {
        self.repo.list(filter).await
    }

    async fn recent(&self, query: RecentQuery) -> AppResult<Vec<Package>> {
        self.repo.recent(query.limit()).await
    }

    async fn get(&self, id: Uuid) -> AppResult<Package> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn create(&self, input: PackageInput) -> AppResult<Package> {
        let package = Package::create(input)?;
        let created = self.repo.insert(package).await?;
        self.feed.publish(ChangeEvent::inserted(TABLE_PACKAGES, created.id));
        Ok(created)
    }

    async fn update(&self, id: Uuid, input: PackageInput) -> AppResult<Package> {
        let mut package = self.get(id).await?;
        package.apply(input)?;

        let updated = self.repo.update(package).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_PACKAGES, id));
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed.publish(ChangeEvent::deleted(TABLE_PACKAGES, id));
        Ok(())
    }

    async fn record_view(&self, id: Uuid) -> AppResult<Package> {
        self.repo.increment_views(id).await?;
        self.feed.publish(ChangeEvent::updated(TABLE_PACKAGES, id));
        self.get(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockPackageRepository;
    use common::AppError;
    use domain::DEFAULT_READ_TIME;
    use mockall::predicate::eq;

    fn input() -> PackageInput {
        PackageInput {
            title: "Ten days in the Khumbu".into(),
            excerpt: "What the trail is really like".into(),
            content: "Day one starts in Lukla...".into(),
            category: "Trekking".into(),
            author: "Pemba".into(),
            tags: "everest, khumbu".into(),
            ..Default::default()
        }
    }

    fn stored(id: Uuid, views: i32) -> Package {
        let mut package = Package::create(input()).unwrap();
        package.id = id;
        package.views = views;
        package
    }

    #[tokio::test]
    async fn test_create_fills_defaults() {
        let mut repo = MockPackageRepository::new();
        repo.expect_insert().returning(Ok);

        let service = PackageManager::new(Arc::new(repo), ChangeFeed::new(4));
        let created = service.create(input()).await.unwrap();

        assert_eq!(created.read_time, DEFAULT_READ_TIME);
        assert_eq!(created.tags, vec!["everest", "khumbu"]);
        assert_eq!(created.views, 0);
    }

    #[tokio::test]
    async fn test_recent_clamps_limit() {
        let mut repo = MockPackageRepository::new();
        repo.expect_recent().with(eq(50)).returning(|_| Ok(vec![]));

        let service = PackageManager::new(Arc::new(repo), ChangeFeed::new(4));
        let posts = service
            .recent(RecentQuery { limit: Some(500) })
            .await
            .unwrap();

        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_update_keeps_views() {
        let id = Uuid::new_v4();
        let mut repo = MockPackageRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|id| Ok(Some(stored(id, 42))));
        repo.expect_update().returning(Ok);

        let service = PackageManager::new(Arc::new(repo), ChangeFeed::new(4));
        let updated = service.update(id, input()).await.unwrap();

        assert_eq!(updated.views, 42);
    }

    #[tokio::test]
    async fn test_record_view_publishes_update() {
        let id = Uuid::new_v4();
        let mut repo = MockPackageRepository::new();
        repo.expect_increment_views()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|id| Ok(Some(stored(id, 8))));

        let feed = ChangeFeed::new(4);
        let mut events = feed.subscribe();
        let service = PackageManager::new(Arc::new(repo), feed);

        let viewed = service.record_view(id).await.unwrap();
        assert_eq!(viewed.views, 8);

        let event = events.try_recv().unwrap();
        assert_eq!(event.table, TABLE_PACKAGES);
        assert_eq!(event.kind, domain::ChangeKind::Update);
        assert_eq!(event.id, id);
    }

    #[tokio::test]
    async fn test_record_view_missing_post() {
        let mut repo = MockPackageRepository::new();
        repo.expect_increment_views()
            .returning(|_| Err(AppError::NotFound));
        repo.expect_find_by_id().never();

        let feed = ChangeFeed::new(4);
        let mut events = feed.subscribe();
        let service = PackageManager::new(Arc::new(repo), feed);
        let result = service.record_view(Uuid::new_v4()).await;

        assert!(matches!(result, Err(AppError::NotFound)));
        assert!(events.try_recv().is_err());
    }
}
