//! Service layer - content use cases.
//!
//! Each service validates input, builds domain records, persists them through
//! its repository and publishes a change event after every committed write.

mod category_service;
mod destination_service;
mod enquiry_service;
mod experience_service;
mod generation_service;
mod journey_service;
mod media_service;
mod package_service;
mod resort_service;

pub use category_service::{CategoryManager, CategoryService};
pub use destination_service::{AppendedItems, DestinationManager, DestinationService};
pub use enquiry_service::{EnquiryManager, EnquiryService};
pub use experience_service::{ExperienceManager, ExperienceService};
pub use generation_service::{GenerationManager, GenerationService};
pub use journey_service::{JourneyManager, JourneyService};
pub use media_service::{ImageUpload, MediaManager, MediaService, UploadedImage};
pub use package_service::{PackageManager, PackageService};
pub use resort_service::{
    GalleryManager, GalleryService, ResortActivityManager, ResortActivityService,
    ResortPackageManager, ResortPackageService,
};
