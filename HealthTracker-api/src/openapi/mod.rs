use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/api-docs")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Entry endpoints
        crate::api::handlers::entries::list_entries,
        crate::api::handlers::entries::create_entry,
        crate::api::handlers::entries::get_stats,
        crate::api::handlers::entries::delete_entry,
    ),
    components(
        schemas(
            // Entities
            crate::entities::entry::PublicEntry,
            crate::entities::entry::PublicCreateEntryRequest,
            crate::entities::entry::PublicCreatedEntry,
            crate::entities::entry::PublicSummary,
            crate::entities::common::ErrorResponse,

            // Domain types embedded in responses
            health_tracker_domain::entities::EntryStats,
            health_tracker_domain::entities::Classification,
            health_tracker_domain::entities::BloodPressureCategory,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "entries", description = "Weight and blood pressure entries")
    ),
    info(
        title = "Health Tracker API",
        version = "0.1.0",
        description = "Record weight and blood pressure and summarize them",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
