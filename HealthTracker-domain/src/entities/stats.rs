use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

use super::classification::Classification;

/// Summary metrics over the full entry collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct EntryStats {
    /// Weight of the first entry in insertion order
    pub starting_weight: f64,

    /// Weight of the last entry in insertion order
    pub current_weight: f64,

    /// `current_weight - starting_weight`
    pub weight_change: f64,

    /// Mean systolic pressure over all entries
    pub avg_systolic: f64,

    /// Mean diastolic pressure over all entries
    pub avg_diastolic: f64,

    /// Classification of the last entry
    pub latest: Classification,

    /// Number of entries summarized
    pub entry_count: usize,
}

/// Result of aggregating the collection: either statistics or an explicit "no data" state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Summary {
    /// The collection is empty
    NoData,

    /// Statistics over a non-empty collection
    Available(EntryStats),
}

impl Summary {
    /// Statistics, if there are any
    pub fn stats(&self) -> Option<&EntryStats> {
        match self {
            Summary::NoData => None,
            Summary::Available(stats) => Some(stats),
        }
    }
}
