use serde::{Deserialize, Serialize};

/// Storage model for one health measurement.
///
/// The field names are the on-disk format and must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    /// Calendar date of the measurement, `YYYY-MM-DD`
    pub date: String,

    /// Body weight, in whatever unit the user records
    pub weight: f64,

    /// Systolic blood pressure (the higher number)
    pub systolic: i32,

    /// Diastolic blood pressure (the lower number)
    pub diastolic: i32,
}
