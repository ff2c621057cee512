use crate::entities::entry::Entry;
use crate::entities::stats::{EntryStats, Summary};
use crate::services::classifier::classify;

/// Compute summary metrics over the ordered entry collection.
///
/// Starting and current weight come from the first and last entries in
/// insertion order, not from their dates.
pub fn aggregate(entries: &[Entry]) -> Summary {
    let (first, last) = match (entries.first(), entries.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Summary::NoData,
    };

    let mut systolic_sum: f64 = 0.0;
    let mut diastolic_sum: f64 = 0.0;

    for entry in entries {
        systolic_sum += entry.systolic as f64;
        diastolic_sum += entry.diastolic as f64;
    }

    let count = entries.len();

    Summary::Available(EntryStats {
        starting_weight: first.weight,
        current_weight: last.weight,
        weight_change: last.weight - first.weight,
        avg_systolic: systolic_sum / count as f64,
        avg_diastolic: diastolic_sum / count as f64,
        latest: classify(last.systolic, last.diastolic),
        entry_count: count,
    })
}
