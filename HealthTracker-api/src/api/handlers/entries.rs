use std::sync::Arc;
use axum::{
    extract::{rejection::JsonRejection, Json, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, instrument, warn};

use health_tracker_domain::entities::EntryInput;
use health_tracker_domain::services::{EntryServiceError, EntryServiceTrait};

use crate::entities::common::ErrorResponse;
use crate::entities::entry::{PublicCreateEntryRequest, PublicCreatedEntry, PublicEntry, PublicSummary};

/// Service type for dependency injection
pub type SharedEntryService = Arc<dyn EntryServiceTrait + Send + Sync>;

/// Parse the position segment of a delete route. All-digit values too large
/// for `usize` are `Ok(None)`: they are out of range for any listing.
pub fn parse_index(raw: &str) -> Result<Option<usize>, String> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("index: '{}' is not a non-negative integer", raw));
    }
    Ok(raw.parse::<usize>().ok())
}

/// Map a service error onto the public error response
fn error_response(err: EntryServiceError) -> Response {
    match err {
        EntryServiceError::ValidationError(message) => {
            warn!("Invalid entry data: {}", message);
            ErrorResponse::validation_error("Invalid entry data", Some(message)).into_response()
        }
        EntryServiceError::StorageError(message) => {
            error!("Entry storage failed: {}", message);
            ErrorResponse::storage_error().into_response()
        }
    }
}

/// List all entries with their blood pressure classification
#[utoipa::path(
    get,
    path = "/api/v1/entries",
    responses(
        (status = 200, description = "Entries in insertion order", body = [PublicEntry]),
    ),
    tag = "entries"
)]
#[instrument(skip(service))]
pub async fn list_entries(State(service): State<SharedEntryService>) -> Json<Vec<PublicEntry>> {
    let entries = service.list_entries().await;
    Json(entries.into_iter().map(PublicEntry::from).collect())
}

/// Create a new entry dated today
#[utoipa::path(
    post,
    path = "/api/v1/entries",
    request_body = PublicCreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = PublicCreatedEntry),
        (status = 400, description = "Invalid entry data", body = ErrorResponse),
        (status = 500, description = "Entry could not be saved", body = ErrorResponse),
    ),
    tag = "entries"
)]
#[instrument(skip(service, payload))]
pub async fn create_entry(
    State(service): State<SharedEntryService>,
    payload: Result<Json<PublicCreateEntryRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Rejected entry payload: {}", rejection);
            return ErrorResponse::validation_error("Malformed JSON body", Some(rejection.body_text()))
                .into_response();
        }
    };

    match service.submit_entry(&EntryInput::from(request)).await {
        Ok(entry) => {
            info!("Entry created for {}", entry.date);
            (StatusCode::CREATED, Json(PublicCreatedEntry::from(entry))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Summary statistics over all entries
#[utoipa::path(
    get,
    path = "/api/v1/entries/stats",
    responses(
        (status = 200, description = "Statistics, or status \"no_data\" when there are no entries", body = PublicSummary),
    ),
    tag = "entries"
)]
#[instrument(skip(service))]
pub async fn get_stats(State(service): State<SharedEntryService>) -> Json<PublicSummary> {
    Json(PublicSummary::from(service.summary().await))
}

/// Delete an entry by its position in the current listing
#[utoipa::path(
    delete,
    path = "/api/v1/entries/{index}",
    params(
        ("index" = usize, Path, description = "Position of the entry in the current listing")
    ),
    responses(
        (status = 204, description = "Entry deleted, or index out of range"),
        (status = 400, description = "Index is not a non-negative integer", body = ErrorResponse),
        (status = 500, description = "Collection could not be saved", body = ErrorResponse),
    ),
    tag = "entries"
)]
#[instrument(skip(service))]
pub async fn delete_entry(
    State(service): State<SharedEntryService>,
    Path(raw_index): Path<String>,
) -> Response {
    let index = match parse_index(&raw_index) {
        Ok(Some(index)) => index,
        Ok(None) => {
            info!("No entry at index {}, nothing deleted", raw_index);
            return StatusCode::NO_CONTENT.into_response();
        }
        Err(message) => {
            warn!("Rejected delete index: {}", message);
            return ErrorResponse::validation_error("Invalid entry index", Some(message)).into_response();
        }
    };

    match service.delete_entry(index).await {
        Ok(Some(_)) => StatusCode::NO_CONTENT.into_response(),
        Ok(None) => {
            info!("No entry at index {}, nothing deleted", index);
            StatusCode::NO_CONTENT.into_response()
        }
        Err(e) => error_response(e),
    }
}
