//! Route configuration.

use axum::{extract::DefaultBodyLimit, http::HeaderValue, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};
use tracing::warn;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::ContentServiceConfig;
use crate::handlers::{
    category_routes, destination_routes, enquiry_routes, experience_routes, generation_routes,
    health_routes, journey_routes, media_routes, package_routes, realtime_routes, resort_routes,
};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState, config: &ContentServiceConfig) -> Router {
    Router::new()
        // Health check
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Content collections
        .nest("/api/destinations", destination_routes())
        .nest("/api/journeys", journey_routes())
        .nest("/api/packages", package_routes())
        .nest("/api/experiences", experience_routes())
        .nest("/api/resort", resort_routes())
        .nest("/api/categories", category_routes())
        .nest("/api/enquiries", enquiry_routes())
        // Uploads get their own body limit instead of the 2 MB default
        .nest(
            "/api/media",
            media_routes()
                .layer(DefaultBodyLimit::disable())
                .layer(RequestBodyLimitLayer::new(config.max_upload_bytes)),
        )
        .nest("/api/ai", generation_routes())
        .nest("/api/realtime", realtime_routes())
        .layer(cors_layer(config.cors_allowed_origin.as_deref()))
        .with_state(state)
}

/// CORS for the admin and public sites.
fn cors_layer(allowed_origin: Option<&str>) -> CorsLayer {
    let origin = match allowed_origin.map(HeaderValue::from_str) {
        Some(Ok(origin)) => AllowOrigin::exact(origin),
        Some(Err(_)) => {
            warn!("CORS_ALLOWED_ORIGIN is not a valid header value, allowing any origin");
            AllowOrigin::any()
        }
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}
