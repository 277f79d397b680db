//! Application state - dependency injection container.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::clients::{http_client, GeminiClient, HttpObjectStorage, ObjectStorage, TextGenerator};
use crate::config::ContentServiceConfig;
use crate::infra::HealthProbe;
use crate::realtime::ChangeFeed;
use crate::repository::{
    CategoryStore, DestinationStore, EnquiryStore, ExperienceStore, GalleryStore, JourneyStore,
    PackageStore, ResortActivityStore, ResortPackageStore,
};
use crate::service::{
    CategoryManager, CategoryService, DestinationManager, DestinationService, EnquiryManager,
    EnquiryService, ExperienceManager, ExperienceService, GalleryManager, GalleryService,
    GenerationManager, GenerationService, JourneyManager, JourneyService, MediaManager,
    MediaService, PackageManager, PackageService, ResortActivityManager, ResortActivityService,
    ResortPackageManager, ResortPackageService,
};

/// Application state shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub destinations: Arc<dyn DestinationService>,
    pub journeys: Arc<dyn JourneyService>,
    pub packages: Arc<dyn PackageService>,
    pub experiences: Arc<dyn ExperienceService>,
    pub resort_activities: Arc<dyn ResortActivityService>,
    pub resort_packages: Arc<dyn ResortPackageService>,
    pub gallery: Arc<dyn GalleryService>,
    pub categories: Arc<dyn CategoryService>,
    pub enquiries: Arc<dyn EnquiryService>,
    pub media: Arc<dyn MediaService>,
    pub generation: Arc<dyn GenerationService>,
    /// Change notifications for realtime subscribers
    pub feed: ChangeFeed,
    /// Dependencies reported by `/health`
    pub health: Vec<Arc<dyn HealthProbe>>,
}

impl AppState {
    /// Wire SeaORM stores, external clients and services together.
    pub fn from_connection(
        db: DatabaseConnection,
        config: &ContentServiceConfig,
        health: Vec<Arc<dyn HealthProbe>>,
    ) -> Result<Self, reqwest::Error> {
        let feed = ChangeFeed::new(config.realtime_capacity);
        let client = http_client(config.http_timeout_seconds)?;

        let storage = HttpObjectStorage::from_config(&config.storage, client.clone())
            .map(|s| Arc::new(s) as Arc<dyn ObjectStorage>);
        if storage.is_none() {
            tracing::warn!("Object storage not configured, images will be embedded as data URLs");
        }

        let generator = GeminiClient::from_config(&config.generation, client)
            .map(|g| Arc::new(g) as Arc<dyn TextGenerator>);
        if generator.is_none() {
            tracing::warn!("AI_API_KEY not set, content generation disabled");
        }

        let media: Arc<dyn MediaService> = Arc::new(MediaManager::new(storage));

        Ok(Self {
            destinations: Arc::new(DestinationManager::new(
                Arc::new(DestinationStore::new(db.clone())),
                feed.clone(),
            )),
            journeys: Arc::new(JourneyManager::new(
                Arc::new(JourneyStore::new(db.clone())),
                feed.clone(),
            )),
            packages: Arc::new(PackageManager::new(
                Arc::new(PackageStore::new(db.clone())),
                feed.clone(),
            )),
            experiences: Arc::new(ExperienceManager::new(
                Arc::new(ExperienceStore::new(db.clone())),
                feed.clone(),
            )),
            resort_activities: Arc::new(ResortActivityManager::new(
                Arc::new(ResortActivityStore::new(db.clone())),
                feed.clone(),
            )),
            resort_packages: Arc::new(ResortPackageManager::new(
                Arc::new(ResortPackageStore::new(db.clone())),
                feed.clone(),
            )),
            gallery: Arc::new(GalleryManager::new(
                Arc::new(GalleryStore::new(db.clone())),
                media.clone(),
                feed.clone(),
            )),
            categories: Arc::new(CategoryManager::new(
                Arc::new(CategoryStore::new(db.clone())),
                feed.clone(),
            )),
            enquiries: Arc::new(EnquiryManager::new(
                Arc::new(EnquiryStore::new(db)),
                feed.clone(),
            )),
            media,
            generation: Arc::new(GenerationManager::new(generator)),
            feed,
            health,
        })
    }
}
