//! Category service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Category, CategoryInput, ChangeEvent, DEFAULT_CATEGORIES, TABLE_CATEGORIES};

use crate::realtime::ChangeFeed;
use crate::repository::CategoryRepository;

#[async_trait]
pub trait CategoryService: Send + Sync {
    /// List categories, seeding the defaults into an empty table
    async fn list(&self) -> AppResult<Vec<Category>>;

    async fn create(&self, input: CategoryInput) -> AppResult<Category>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

pub struct CategoryManager {
    repo: Arc<dyn CategoryRepository>,
    feed: ChangeFeed,
}

impl CategoryManager {
    pub fn new(repo: Arc<dyn CategoryRepository>, feed: ChangeFeed) -> Self {
        Self { repo, feed }
    }
}

#[async_trait]
impl CategoryService for CategoryManager {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let categories = self.repo.list().await?;
        if !categories.is_empty() {
            return Ok(categories);
        }

        let defaults: Vec<Category> = DEFAULT_CATEGORIES
            .iter()
            .map(|name| Category::named(name))
            .collect();
        let seeded: Vec<Uuid> = defaults.iter().map(|c| c.id).collect();
        tracing::info!(count = defaults.len(), "Seeding default categories");

        match self.repo.insert_many(defaults).await {
            Ok(()) => {
                for id in seeded {
                    self.feed.publish(ChangeEvent::inserted(TABLE_CATEGORIES, id));
                }
            }
            // Another request seeded first
            Err(AppError::Conflict(_)) => {}
            Err(e) => return Err(e),
        }
        self.repo.list().await
    }

    async fn create(&self, input: CategoryInput) -> AppResult<Category> {
        let category = Category::create(input)?;
        if self.repo.name_taken(&category.name).await? {
            return Err(AppError::conflict("Category"));
        }

        let created = self.repo.insert(category).await?;
        self.feed
            .publish(ChangeEvent::inserted(TABLE_CATEGORIES, created.id));
        Ok(created)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        self.feed.publish(ChangeEvent::deleted(TABLE_CATEGORIES, id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCategoryRepository;
    use mockall::predicate::eq;
    use mockall::Sequence;

    #[tokio::test]
    async fn test_list_seeds_defaults_when_empty() {
        let seeded = Arc::new(std::sync::Mutex::new(Vec::new()));
        let captured = seeded.clone();

        let mut seq = Sequence::new();
        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![]));
        repo.expect_insert_many()
            .withf(|categories| categories.len() == DEFAULT_CATEGORIES.len())
            .times(1)
            .in_sequence(&mut seq)
            .returning(move |categories| {
                captured.lock().unwrap().extend(categories.iter().map(|c| c.id));
                Ok(())
            });
        repo.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(DEFAULT_CATEGORIES.iter().map(|n| Category::named(n)).collect()));

        let feed = ChangeFeed::new(16);
        let mut events = feed.subscribe();
        let service = CategoryManager::new(Arc::new(repo), feed);
        let categories = service.list().await.unwrap();

        let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, DEFAULT_CATEGORIES);

        let published: Vec<Uuid> = std::iter::from_fn(|| events.try_recv().ok())
            .inspect(|event| {
                assert_eq!(event.table, TABLE_CATEGORIES);
                assert_eq!(event.kind, domain::ChangeKind::Insert);
            })
            .map(|event| event.id)
            .collect();
        assert_eq!(published, *seeded.lock().unwrap());
    }

    #[tokio::test]
    async fn test_list_seeding_race_publishes_nothing() {
        let mut repo = MockCategoryRepository::new();
        let mut seq = Sequence::new();
        repo.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![]));
        repo.expect_insert_many()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(AppError::conflict("Category")));
        repo.expect_list()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec![Category::named("Trekking")]));

        let feed = ChangeFeed::new(16);
        let mut events = feed.subscribe();
        let service = CategoryManager::new(Arc::new(repo), feed);

        assert_eq!(service.list().await.unwrap().len(), 1);
        assert!(events.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_list_does_not_seed_existing() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_list()
            .returning(|| Ok(vec![Category::named("Rafting")]));
        repo.expect_insert_many().never();

        let service = CategoryManager::new(Arc::new(repo), ChangeFeed::new(4));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_name() {
        let mut repo = MockCategoryRepository::new();
        repo.expect_name_taken()
            .with(eq("Wildlife"))
            .returning(|_| Ok(true));
        repo.expect_insert().never();

        let service = CategoryManager::new(Arc::new(repo), ChangeFeed::new(4));
        let result = service
            .create(CategoryInput {
                name: " Wildlife ".into(),
            })
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
    }
}
