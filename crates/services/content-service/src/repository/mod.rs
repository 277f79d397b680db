//! Repository layer for data access.

mod category_repository;
mod destination_repository;
pub mod entities;
mod enquiry_repository;
mod experience_repository;
mod journey_repository;
mod package_repository;
mod resort_repository;

pub use category_repository::{CategoryRepository, CategoryStore};
pub use destination_repository::{DestinationRepository, DestinationStore};
pub use enquiry_repository::{EnquiryRepository, EnquiryStore};
pub use experience_repository::{ExperienceRepository, ExperienceStore};
pub use journey_repository::{JourneyRepository, JourneyStore, RemovedJourney};
pub use package_repository::{PackageRepository, PackageStore};
pub use resort_repository::{
    GalleryRepository, GalleryStore, ResortActivityRepository, ResortActivityStore,
    ResortPackageRepository, ResortPackageStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use category_repository::MockCategoryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use destination_repository::MockDestinationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use enquiry_repository::MockEnquiryRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use experience_repository::MockExperienceRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use journey_repository::MockJourneyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use package_repository::MockPackageRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use resort_repository::{
    MockGalleryRepository, MockResortActivityRepository, MockResortPackageRepository,
};

use common::AppError;
use sea_orm::{DbErr, DeleteResult};

/// Map a failed insert or update. An update that matched no row is a missing record.
pub(crate) fn write_error(err: DbErr, entity: &str) -> AppError {
    match err {
        DbErr::RecordNotUpdated => AppError::NotFound,
        other => AppError::from_write(other, entity),
    }
}

/// A delete that removed nothing targeted a missing record.
pub(crate) fn ensure_deleted(result: DeleteResult) -> Result<(), AppError> {
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(())
}
