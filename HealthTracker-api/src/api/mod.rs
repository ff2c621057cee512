pub mod handlers;
pub mod routes;

use std::sync::Arc;
use axum::Router;

use health_tracker_data::repository::JsonFileStore;
use health_tracker_domain::health::StoreHealthService;
use health_tracker_domain::services::EntryService;

use crate::api::handlers::health::AppEnvironment;
use crate::config::AppConfig;

/// Create the application router backed by the configured data file
pub fn create_application(config: &AppConfig) -> Router {
    let store = JsonFileStore::new(&config.data_file);

    let entry_service = Arc::new(EntryService::new(store.clone()));
    let health_service = Arc::new(StoreHealthService::new(store));

    routes::create_app(
        entry_service,
        health_service,
        AppEnvironment(config.environment.clone()),
    )
}
