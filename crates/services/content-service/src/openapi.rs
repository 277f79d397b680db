//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::destination_handler::AppendItemsRequest;
use crate::handlers::health_handler::{HealthResponse, ServiceHealth};
use crate::handlers::media_handler::ImageForm;
use crate::service::{AppendedItems, UploadedImage};
use domain::{
    Activity, Category, CategoryInput, ChangeEvent, ChangeKind, ContentType, Destination,
    DestinationInput, Enquiry, EnquiryInput, EnquiryUpdate, Experience, ExperienceInput, Faq,
    GalleryItem, GalleryItemInput, GeneratedContent, GenerationRequest, ItineraryDay, Journey,
    JourneyDay, JourneyDayInput, JourneyInput, NestedCollection, Package, PackageInput,
    Place, ResortActivity, ResortActivityInput, ResortPackage, ResortPackageInput,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::health_check,
        crate::handlers::destination_handler::list_destinations,
        crate::handlers::destination_handler::get_destination,
        crate::handlers::destination_handler::get_destination_by_slug,
        crate::handlers::destination_handler::create_destination,
        crate::handlers::destination_handler::update_destination,
        crate::handlers::destination_handler::delete_destination,
        crate::handlers::destination_handler::append_destination_items,
        crate::handlers::journey_handler::list_journeys,
        crate::handlers::journey_handler::get_journey,
        crate::handlers::journey_handler::create_journey,
        crate::handlers::journey_handler::update_journey,
        crate::handlers::journey_handler::delete_journey,
        crate::handlers::journey_handler::list_journey_days,
        crate::handlers::journey_handler::add_journey_day,
        crate::handlers::journey_handler::update_journey_day,
        crate::handlers::journey_handler::delete_journey_day,
        crate::handlers::package_handler::list_packages,
        crate::handlers::package_handler::recent_packages,
        crate::handlers::package_handler::get_package,
        crate::handlers::package_handler::create_package,
        crate::handlers::package_handler::update_package,
        crate::handlers::package_handler::delete_package,
        crate::handlers::package_handler::record_package_view,
        crate::handlers::experience_handler::list_experiences,
        crate::handlers::experience_handler::get_experience,
        crate::handlers::experience_handler::create_experience,
        crate::handlers::experience_handler::update_experience,
        crate::handlers::experience_handler::delete_experience,
        crate::handlers::resort_handler::list_activities,
        crate::handlers::resort_handler::get_activity,
        crate::handlers::resort_handler::create_activity,
        crate::handlers::resort_handler::update_activity,
        crate::handlers::resort_handler::delete_activity,
        crate::handlers::resort_handler::list_resort_packages,
        crate::handlers::resort_handler::get_resort_package,
        crate::handlers::resort_handler::create_resort_package,
        crate::handlers::resort_handler::update_resort_package,
        crate::handlers::resort_handler::delete_resort_package,
        crate::handlers::resort_handler::list_gallery,
        crate::handlers::resort_handler::get_gallery_item,
        crate::handlers::resort_handler::create_gallery_item,
        crate::handlers::resort_handler::update_gallery_item,
        crate::handlers::resort_handler::delete_gallery_item,
        crate::handlers::category_handler::list_categories,
        crate::handlers::category_handler::create_category,
        crate::handlers::category_handler::delete_category,
        crate::handlers::enquiry_handler::list_enquiries,
        crate::handlers::enquiry_handler::get_enquiry,
        crate::handlers::enquiry_handler::submit_enquiry,
        crate::handlers::enquiry_handler::update_enquiry,
        crate::handlers::enquiry_handler::delete_enquiry,
        crate::handlers::media_handler::upload_image,
        crate::handlers::media_handler::delete_image,
        crate::handlers::generation_handler::generate_content,
        crate::handlers::realtime_handler::watch_all,
        crate::handlers::realtime_handler::watch_table,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceHealth,
            Destination,
            DestinationInput,
            Place,
            Activity,
            ItineraryDay,
            Faq,
            NestedCollection,
            AppendItemsRequest,
            AppendedItems,
            Journey,
            JourneyInput,
            JourneyDay,
            JourneyDayInput,
            Package,
            PackageInput,
            Experience,
            ExperienceInput,
            ResortActivity,
            ResortActivityInput,
            ResortPackage,
            ResortPackageInput,
            GalleryItem,
            GalleryItemInput,
            Category,
            CategoryInput,
            Enquiry,
            EnquiryInput,
            EnquiryUpdate,
            ImageForm,
            UploadedImage,
            ContentType,
            GenerationRequest,
            GeneratedContent,
            ChangeEvent,
            ChangeKind,
        )
    ),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Destinations", description = "Destination guides with nested collections"),
        (name = "Journeys", description = "Journeys and their day schedules"),
        (name = "Packages", description = "Blog-style travel packages"),
        (name = "Experiences", description = "Bookable experiences"),
        (name = "Resort", description = "Resort activities, stay packages and gallery"),
        (name = "Categories", description = "Content categories"),
        (name = "Enquiries", description = "Visitor enquiries"),
        (name = "Media", description = "Image uploads"),
        (name = "AI", description = "AI-assisted form filling"),
        (name = "Realtime", description = "Server-sent change notifications"),
    )
)]
pub struct ApiDoc;
