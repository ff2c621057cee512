//! HTML page handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use tracing::{error, info, instrument, warn};

use health_tracker_domain::entities::EntryInput;
use health_tracker_domain::services::EntryServiceError;

use crate::api::handlers::entries::{parse_index, SharedEntryService};
use crate::views::{render, AddTemplate, IndexTemplate, StatsTemplate};

/// Entry list with classification
#[instrument(skip(service))]
pub async fn index(State(service): State<SharedEntryService>) -> Response {
    let entries = service.list_entries().await;
    render(IndexTemplate::new(entries))
}

/// Empty new entry form
pub async fn add_form() -> Response {
    render(AddTemplate::blank())
}

/// Handle the new entry form
#[instrument(skip(service, input))]
pub async fn add_submit(
    State(service): State<SharedEntryService>,
    Form(input): Form<EntryInput>,
) -> Response {
    match service.submit_entry(&input).await {
        Ok(entry) => {
            info!("Entry for {} saved from form", entry.date);
            Redirect::to("/").into_response()
        }
        Err(EntryServiceError::ValidationError(message)) => {
            warn!("Invalid entry form: {}", message);
            (StatusCode::BAD_REQUEST, render(AddTemplate::with_error(&input, message))).into_response()
        }
        Err(e) => {
            error!("Error saving entry: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                render(AddTemplate::with_error(&input, "The entry could not be saved. Please try again.")),
            )
                .into_response()
        }
    }
}

/// Summary statistics
#[instrument(skip(service))]
pub async fn stats(State(service): State<SharedEntryService>) -> Response {
    render(StatsTemplate::from(service.summary().await))
}

/// Delete by position, then go back to the list. Unknown positions are ignored.
#[instrument(skip(service))]
pub async fn delete(State(service): State<SharedEntryService>, Path(raw_index): Path<String>) -> Response {
    let index = match parse_index(&raw_index) {
        Ok(Some(index)) => index,
        Ok(None) => return Redirect::to("/").into_response(),
        Err(message) => {
            warn!("Rejected delete index: {}", message);
            return (StatusCode::NOT_FOUND, "No such page").into_response();
        }
    };

    match service.delete_entry(index).await {
        Ok(_) => Redirect::to("/").into_response(),
        Err(e) => {
            error!("Error deleting entry {}: {}", index, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "The entry could not be deleted").into_response()
        }
    }
}
