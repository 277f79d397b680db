//! Domain layer - Content entities, payloads and value normalizers.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Records here are what the service persists and what the API returns.

pub mod category;
pub mod change;
pub mod constants;
pub mod destination;
pub mod enquiry;
pub mod error;
pub mod experience;
pub mod generation;
pub mod journey;
pub mod lists;
pub mod media;
pub mod nested;
pub mod package;
pub mod query;
pub mod resort;
pub mod slug;
pub mod validation;

pub use category::{Category, CategoryInput};
pub use change::{ChangeEvent, ChangeKind};
pub use constants::*;
pub use destination::{
    best_time_details_default, how_to_reach_default, where_to_stay_default, Activity, Destination,
    DestinationInput, Faq, ItineraryDay, NestedCollection, Place,
};
pub use enquiry::{Enquiry, EnquiryInput, EnquiryUpdate};
pub use error::{DomainError, DomainResult};
pub use experience::{Experience, ExperienceInput};
pub use generation::{ContentType, GeneratedContent, GenerationRequest};
pub use journey::{Journey, JourneyDay, JourneyDayInput, JourneyInput};
pub use lists::ListInput;
pub use nested::{normalize_keyed_map, JsonMap};
pub use package::{Package, PackageInput};
pub use query::{ListFilter, RecentQuery};
pub use resort::{
    GalleryItem, GalleryItemInput, ResortActivity, ResortActivityInput, ResortPackage,
    ResortPackageInput,
};
pub use slug::slugify;
