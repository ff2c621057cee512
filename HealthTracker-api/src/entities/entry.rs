use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use health_tracker_domain::entities::{ClassifiedEntry, Entry, EntryInput, EntryStats, Summary};

/// Public representation of a stored entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicEntry {
    /// Position in the current listing, used for deletion
    pub index: usize,

    /// Date the entry was recorded (`YYYY-MM-DD`)
    pub date: String,

    /// Body weight
    pub weight: f64,

    /// Systolic blood pressure
    pub systolic: i32,

    /// Diastolic blood pressure
    pub diastolic: i32,

    /// Blood pressure category label
    pub status: String,

    /// Severity marker for the category
    pub symbol: String,
}

impl From<ClassifiedEntry> for PublicEntry {
    fn from(classified: ClassifiedEntry) -> Self {
        Self {
            index: classified.index,
            date: classified.entry.date,
            weight: classified.entry.weight,
            systolic: classified.entry.systolic,
            diastolic: classified.entry.diastolic,
            status: classified.classification.label,
            symbol: classified.classification.symbol,
        }
    }
}

/// A field value that may arrive as a JSON number or as text
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Numeric value
    Number(f64),
    /// Textual value, parsed by the server
    Text(String),
}

impl FieldValue {
    fn into_text(self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(s) => s,
        }
    }
}

/// Request payload for creating a new entry. The date is assigned by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct PublicCreateEntryRequest {
    /// Body weight
    #[schema(value_type = Option<String>)]
    pub weight: Option<FieldValue>,

    /// Systolic blood pressure, a whole number
    #[schema(value_type = Option<String>)]
    pub systolic: Option<FieldValue>,

    /// Diastolic blood pressure, a whole number
    #[schema(value_type = Option<String>)]
    pub diastolic: Option<FieldValue>,
}

impl From<PublicCreateEntryRequest> for EntryInput {
    fn from(request: PublicCreateEntryRequest) -> Self {
        let text = |value: Option<FieldValue>| value.map(FieldValue::into_text).unwrap_or_default();
        EntryInput::new(text(request.weight), text(request.systolic), text(request.diastolic))
    }
}

/// Response for a newly created entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicCreatedEntry {
    /// Date assigned to the entry
    pub date: String,
    /// Body weight
    pub weight: f64,
    /// Systolic blood pressure
    pub systolic: i32,
    /// Diastolic blood pressure
    pub diastolic: i32,
}

impl From<Entry> for PublicCreatedEntry {
    fn from(entry: Entry) -> Self {
        Self {
            date: entry.date,
            weight: entry.weight,
            systolic: entry.systolic,
            diastolic: entry.diastolic,
        }
    }
}

/// Summary statistics, or an explicit empty state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicSummary {
    /// "no_data" when there are no entries, otherwise "available"
    pub status: String,

    /// Statistics, present only when status is "available"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<EntryStats>,
}

impl From<Summary> for PublicSummary {
    fn from(summary: Summary) -> Self {
        match summary {
            Summary::NoData => Self {
                status: "no_data".to_string(),
                stats: None,
            },
            Summary::Available(stats) => Self {
                status: "available".to_string(),
                stats: Some(stats),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_and_text_become_input_strings() {
        let request: PublicCreateEntryRequest =
            serde_json::from_str(r#"{"weight": 70.5, "systolic": "118", "diastolic": 76}"#).unwrap();

        let input = EntryInput::from(request);
        assert_eq!(input.weight, "70.5");
        assert_eq!(input.systolic, "118");
        assert_eq!(input.diastolic, "76");
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let request: PublicCreateEntryRequest = serde_json::from_str(r#"{"weight": 70}"#).unwrap();

        let input = EntryInput::from(request);
        assert_eq!(input.weight, "70");
        assert!(input.systolic.is_empty());
    }
}
