// Testing utilities and doubles for the domain layer
// This module is only available when the "mock" feature is enabled

// Re-export useful test doubles from the data layer
pub use health_tracker_data::repository::tests::FailingStore;
pub use health_tracker_data::repository::InMemoryStore;

use chrono::NaiveDate;
use health_tracker_data::models::entry::EntryRecord;

use crate::services::entries::EntryService;

/// Fixed "today" used by test services
pub fn test_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 31).expect("valid calendar date")
}

/// Build a storage record for seeding stores
pub fn test_record(date: &str, weight: f64, systolic: i32, diastolic: i32) -> EntryRecord {
    EntryRecord {
        date: date.to_string(),
        weight,
        systolic,
        diastolic,
    }
}

/// Entry service over a shared in-memory store, dated with [`test_day`]
pub fn in_memory_service(store: InMemoryStore) -> EntryService<InMemoryStore> {
    EntryService::with_clock(store, test_day)
}

/// Entry service whose saves always fail
pub fn failing_service(entries: Vec<EntryRecord>) -> EntryService<FailingStore> {
    EntryService::with_clock(FailingStore::with_entries(entries), test_day)
}
