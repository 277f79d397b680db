//! HTTP handlers.

pub mod category_handler;
pub mod destination_handler;
pub mod enquiry_handler;
pub mod experience_handler;
pub mod generation_handler;
pub mod health_handler;
pub mod journey_handler;
pub mod media_handler;
pub mod package_handler;
pub mod realtime_handler;
pub mod resort_handler;

pub use category_handler::category_routes;
pub use destination_handler::destination_routes;
pub use enquiry_handler::enquiry_routes;
pub use experience_handler::experience_routes;
pub use generation_handler::generation_routes;
pub use health_handler::health_routes;
pub use journey_handler::journey_routes;
pub use media_handler::media_routes;
pub use package_handler::package_routes;
pub use realtime_handler::realtime_routes;
pub use resort_handler::resort_routes;
