//! View models for the HTML pages

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use health_tracker_domain::entities::{BloodPressureCategory, ClassifiedEntry, EntryInput, EntryStats, Summary};

/// CSS class used to colour a category
fn status_class(category: BloodPressureCategory) -> &'static str {
    match category {
        BloodPressureCategory::Normal => "status-normal",
        BloodPressureCategory::Elevated => "status-elevated",
        BloodPressureCategory::Hypertension1 => "status-stage1",
        BloodPressureCategory::Hypertension2 => "status-stage2",
    }
}

/// Render a template into an HTML response, or a 500 if rendering fails
pub fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!("Failed to render template: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render page").into_response()
        }
    }
}

/// One row of the entry table
#[derive(Debug, Clone)]
pub struct EntryRow {
    pub index: usize,
    pub date: String,
    pub weight: String,
    pub blood_pressure: String,
    pub status: String,
    pub symbol: String,
    pub status_class: &'static str,
}

impl From<ClassifiedEntry> for EntryRow {
    fn from(classified: ClassifiedEntry) -> Self {
        let entry = classified.entry;
        Self {
            index: classified.index,
            date: entry.date,
            weight: format!("{:.1}", entry.weight),
            blood_pressure: format!("{}/{}", entry.systolic, entry.diastolic),
            status: classified.classification.label,
            symbol: classified.classification.symbol,
            status_class: status_class(classified.classification.category),
        }
    }
}

/// Entry list page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub rows: Vec<EntryRow>,
}

impl IndexTemplate {
    pub fn new(entries: Vec<ClassifiedEntry>) -> Self {
        Self {
            rows: entries.into_iter().map(EntryRow::from).collect(),
        }
    }
}

/// New entry form, optionally re-shown with an error and the submitted values
#[derive(Template, Default)]
#[template(path = "add.html")]
pub struct AddTemplate {
    pub error: Option<String>,
    pub weight: String,
    pub systolic: String,
    pub diastolic: String,
}

impl AddTemplate {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn with_error(input: &EntryInput, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            weight: input.weight.clone(),
            systolic: input.systolic.clone(),
            diastolic: input.diastolic.clone(),
        }
    }
}

/// Pre-formatted statistics for display
#[derive(Debug, Clone)]
pub struct StatsView {
    pub starting_weight: String,
    pub current_weight: String,
    pub weight_change: String,
    pub avg_systolic: String,
    pub avg_diastolic: String,
    pub latest_status: String,
    pub latest_symbol: String,
    pub latest_class: &'static str,
    pub entry_count: usize,
}

impl From<EntryStats> for StatsView {
    fn from(stats: EntryStats) -> Self {
        Self {
            starting_weight: format!("{:.1}", stats.starting_weight),
            current_weight: format!("{:.1}", stats.current_weight),
            weight_change: format!("{:+.1}", stats.weight_change),
            avg_systolic: format!("{:.1}", stats.avg_systolic),
            avg_diastolic: format!("{:.1}", stats.avg_diastolic),
            latest_class: status_class(stats.latest.category),
            latest_status: stats.latest.label,
            latest_symbol: stats.latest.symbol,
            entry_count: stats.entry_count,
        }
    }
}

/// Statistics page
#[derive(Template)]
#[template(path = "stats.html")]
pub struct StatsTemplate {
    pub stats: Option<StatsView>,
}

impl From<Summary> for StatsTemplate {
    fn from(summary: Summary) -> Self {
        let stats = match summary {
            Summary::NoData => None,
            Summary::Available(stats) => Some(StatsView::from(stats)),
        };
        Self { stats }
    }
}
