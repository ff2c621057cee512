use std::sync::Arc;
use axum::{
    routing::{delete, get},
    Extension, Router,
};
use tower_http::trace::TraceLayer;
use tracing::debug;

use health_tracker_domain::health::HealthServiceTrait;

use crate::api::handlers::entries::{self, SharedEntryService};
use crate::api::handlers::health::{self, AppEnvironment};
use crate::api::handlers::pages;
use crate::openapi::configure_swagger_routes;

/// Create the application router
pub fn create_app(
    entry_service: SharedEntryService,
    health_service: Arc<dyn HealthServiceTrait>,
    environment: AppEnvironment,
) -> Router {
    debug!("Creating application router");

    // HTML pages
    let page_routes = Router::new()
        .route("/", get(pages::index))
        .route("/add", get(pages::add_form).post(pages::add_submit))
        .route("/stats", get(pages::stats))
        .route("/delete/:index", get(pages::delete));

    debug!("Page routes configured");

    // JSON API; specific routes before parametrized ones
    let api_routes = Router::new()
        .route("/entries/stats", get(entries::get_stats))
        .route("/entries", get(entries::list_entries).post(entries::create_entry))
        .route("/entries/:index", delete(entries::delete_entry));

    debug!("API routes configured");

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .layer(Extension(health_service))
        .layer(Extension(environment));

    let app = Router::new()
        .merge(page_routes)
        .nest("/api/v1", api_routes)
        .with_state(entry_service)
        .merge(public_routes)
        .merge(configure_swagger_routes())
        .layer(TraceLayer::new_for_http());

    // Initialize health check service startup time
    health::initialize_server_start_time();
    debug!("Application router ready");

    app
}
