use serde::{Deserialize, Serialize};
use validator::Validate;

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::classification::Classification;

/// Format of `Entry::date`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Domain model for one health measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Entry {
    /// Date the entry was recorded, `YYYY-MM-DD`
    pub date: String,

    /// Body weight
    pub weight: f64,

    /// Systolic blood pressure (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: i32,
}

/// An entry together with its position in the collection and its derived classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedEntry {
    /// Position in the current listing; this is what deletion is keyed on
    pub index: usize,

    /// The stored measurement
    #[serde(flatten)]
    pub entry: Entry,

    /// Blood pressure classification of this measurement
    pub classification: Classification,
}

/// Typed values for a new entry. The date is assigned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct CreateEntryRequest {
    /// Body weight
    pub weight: f64,

    /// Systolic blood pressure
    pub systolic: i32,

    /// Diastolic blood pressure
    pub diastolic: i32,
}

/// Raw caller input for a new entry, as typed into a form.
///
/// Missing fields deserialize as empty strings so that they surface as
/// validation errors rather than extractor rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EntryInput {
    /// Body weight, must parse as a real number
    #[validate(length(min = 1, message = "Weight is required"))]
    pub weight: String,

    /// Systolic pressure, must parse as an integer
    #[validate(length(min = 1, message = "Systolic pressure is required"))]
    pub systolic: String,

    /// Diastolic pressure, must parse as an integer
    #[validate(length(min = 1, message = "Diastolic pressure is required"))]
    pub diastolic: String,
}

impl EntryInput {
    /// Convenience constructor from anything string-like
    pub fn new(weight: impl Into<String>, systolic: impl Into<String>, diastolic: impl Into<String>) -> Self {
        Self {
            weight: weight.into(),
            systolic: systolic.into(),
            diastolic: diastolic.into(),
        }
    }
}
