use std::path::PathBuf;
use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use validator::Validate;

use health_tracker_data::repository::{EntryStoreTrait, JsonFileStore, RepositoryError};

use crate::entities::conversions;
use crate::entities::entry::{ClassifiedEntry, CreateEntryRequest, Entry, EntryInput, DATE_FORMAT};
use crate::entities::stats::Summary;
use crate::services::classifier::classify;
use crate::services::statistics::aggregate;

/// Entry service errors
#[derive(Debug, Error)]
pub enum EntryServiceError {
    /// Caller input could not be turned into an entry
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// The collection could not be written back
    #[error("Storage error: {0}")]
    StorageError(String),
}

/// Source of "today" for newly added entries
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Trait for entry service operations
#[async_trait]
pub trait EntryServiceTrait {
    /// Check and coerce raw caller input into a typed request
    fn validate_input(&self, input: &EntryInput) -> Result<CreateEntryRequest, EntryServiceError>;

    /// List all entries in insertion order with their classification attached
    async fn list_entries(&self) -> Vec<ClassifiedEntry>;

    /// Append a new entry dated today
    async fn add_entry(&self, request: CreateEntryRequest) -> Result<Entry, EntryServiceError>;

    /// Validate raw caller input, then append it as a new entry
    async fn submit_entry(&self, input: &EntryInput) -> Result<Entry, EntryServiceError>;

    /// Remove the entry at `index`. Out-of-range indexes are a no-op and return `Ok(None)`.
    async fn delete_entry(&self, index: usize) -> Result<Option<Entry>, EntryServiceError>;

    /// Aggregate statistics over the whole collection
    async fn summary(&self) -> Summary;
}

/// Entry service for domain logic.
///
/// Every operation loads the full collection from the store, works on it in
/// memory and, for mutations, writes it back in full. Nothing is cached and
/// no lock spans the load and the save, so concurrent mutations race and the
/// last save wins.
pub struct EntryService<S: EntryStoreTrait> {
    store: S,
    clock: Clock,
}

impl<S: EntryStoreTrait> EntryService<S> {
    /// Create a new entry service dating entries with the local system clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, local_today)
    }

    /// Create a new entry service with an explicit clock
    pub fn with_clock(store: S, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Map repository errors to service errors
    fn map_repo_error(&self, err: RepositoryError) -> EntryServiceError {
        error!("Failed to save entries: {}", err);
        EntryServiceError::StorageError(err.to_string())
    }

    async fn load_entries(&self) -> Vec<Entry> {
        conversions::convert_to_domain_entries(self.store.load().await)
    }
}

fn parse_weight(raw: &str) -> Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(weight) if weight.is_finite() => Ok(weight),
        _ => Err(format!("weight: '{}' is not a number", raw)),
    }
}

fn parse_pressure(field: &str, raw: &str) -> Result<i32, String> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| format!("{}: '{}' is not a whole number", field, raw))
}

#[async_trait]
impl<S: EntryStoreTrait> EntryServiceTrait for EntryService<S> {
    fn validate_input(&self, input: &EntryInput) -> Result<CreateEntryRequest, EntryServiceError> {
        // Required fields first, using the validator crate
        if let Err(validation_errors) = input.validate() {
            let mut messages = validation_errors
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let error_msgs: Vec<String> = errors
                        .iter()
                        .map(|err| match &err.message {
                            Some(msg) => msg.to_string(),
                            None => format!("Invalid {}", field),
                        })
                        .collect();
                    format!("{}: {}", field, error_msgs.join(", "))
                })
                .collect::<Vec<String>>();
            messages.sort();

            return Err(EntryServiceError::ValidationError(messages.join("; ")));
        }

        // Then type coercion
        let weight = parse_weight(&input.weight);
        let systolic = parse_pressure("systolic", &input.systolic);
        let diastolic = parse_pressure("diastolic", &input.diastolic);

        match (weight, systolic, diastolic) {
            (Ok(weight), Ok(systolic), Ok(diastolic)) => Ok(CreateEntryRequest {
                weight,
                systolic,
                diastolic,
            }),
            (weight, systolic, diastolic) => {
                let messages: Vec<String> = [weight.err(), systolic.err(), diastolic.err()]
                    .into_iter()
                    .flatten()
                    .collect();
                Err(EntryServiceError::ValidationError(messages.join("; ")))
            }
        }
    }

    async fn list_entries(&self) -> Vec<ClassifiedEntry> {
        self.load_entries()
            .await
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                let classification = classify(entry.systolic, entry.diastolic);
                ClassifiedEntry {
                    index,
                    entry,
                    classification,
                }
            })
            .collect()
    }

    async fn add_entry(&self, request: CreateEntryRequest) -> Result<Entry, EntryServiceError> {
        if !request.weight.is_finite() {
            return Err(EntryServiceError::ValidationError(
                "weight: must be a finite number".to_string(),
            ));
        }

        let entry = Entry {
            date: (self.clock)().format(DATE_FORMAT).to_string(),
            weight: request.weight,
            systolic: request.systolic,
            diastolic: request.diastolic,
        };

        let mut records = self.store.load().await;
        records.push(conversions::convert_to_data_entry(&entry));

        self.store
            .save(&records)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        info!(
            date = %entry.date,
            count = records.len(),
            "Entry added"
        );
        Ok(entry)
    }

    async fn submit_entry(&self, input: &EntryInput) -> Result<Entry, EntryServiceError> {
        let request = self.validate_input(input).map_err(|e| {
            warn!("Rejected entry input: {}", e);
            e
        })?;
        self.add_entry(request).await
    }

    async fn delete_entry(&self, index: usize) -> Result<Option<Entry>, EntryServiceError> {
        let mut records = self.store.load().await;

        if index >= records.len() {
            debug!("Delete index {} out of range for {} entries, ignoring", index, records.len());
            return Ok(None);
        }

        let removed = records.remove(index);

        self.store
            .save(&records)
            .await
            .map_err(|e| self.map_repo_error(e))?;

        info!(index, date = %removed.date, "Entry deleted");
        Ok(Some(conversions::convert_to_domain_entry(removed)))
    }

    async fn summary(&self) -> Summary {
        aggregate(&self.load_entries().await)
    }
}

/// Create a default entry service backed by the JSON file at `path`
pub fn create_default_entry_service(path: impl Into<PathBuf>) -> impl EntryServiceTrait + Send + Sync {
    EntryService::new(JsonFileStore::new(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_tracker_data::models::entry::EntryRecord;
    use health_tracker_data::repository::tests::FailingStore;
    use health_tracker_data::repository::InMemoryStore;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl EntryStoreTrait for Store {
            async fn load(&self) -> Vec<EntryRecord>;
            async fn save(&self, entries: &[EntryRecord]) -> Result<(), RepositoryError>;
            async fn probe(&self) -> Result<bool, String>;
        }
    }

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn service(store: InMemoryStore) -> EntryService<InMemoryStore> {
        EntryService::with_clock(store, fixed_day)
    }

    fn record(date: &str, weight: f64, systolic: i32, diastolic: i32) -> EntryRecord {
        EntryRecord {
            date: date.to_string(),
            weight,
            systolic,
            diastolic,
        }
    }

    #[tokio::test]
    async fn test_add_entry_on_empty_store() {
        let store = InMemoryStore::new();
        let service = service(store.clone());

        let entry = service
            .add_entry(CreateEntryRequest { weight: 70.5, systolic: 118, diastolic: 76 })
            .await
            .unwrap();

        assert_eq!(entry.date, "2024-06-15");
        assert_eq!(store.load().await, vec![record("2024-06-15", 70.5, 118, 76)]);

        let stats = service.summary().await;
        let stats = stats.stats().unwrap();
        assert_eq!(stats.starting_weight, 70.5);
        assert_eq!(stats.current_weight, 70.5);
        assert_eq!(stats.weight_change, 0.0);
    }

    #[tokio::test]
    async fn test_default_clock_uses_local_date() {
        let store = InMemoryStore::new();
        let service = EntryService::new(store.clone());

        let before = Local::now().date_naive();
        let entry = service
            .add_entry(CreateEntryRequest { weight: 70.0, systolic: 120, diastolic: 80 })
            .await
            .unwrap();
        let after = Local::now().date_naive();

        let date = NaiveDate::parse_from_str(&entry.date, DATE_FORMAT).unwrap();
        assert!(date == before || date == after);
    }

    #[tokio::test]
    async fn test_three_adds_keep_order() {
        let store = InMemoryStore::new();
        let service = service(store.clone());

        for (weight, systolic, diastolic) in [(70.0, 120, 80), (71.0, 125, 82), (69.0, 130, 84)] {
            service
                .add_entry(CreateEntryRequest { weight, systolic, diastolic })
                .await
                .unwrap();
        }

        let summary = service.summary().await;
        let stats = summary.stats().unwrap();
        assert_eq!(stats.starting_weight, 70.0);
        assert_eq!(stats.current_weight, 69.0);
        assert_eq!(stats.weight_change, -1.0);
        assert_eq!(stats.entry_count, 3);
        assert_eq!(stats.avg_systolic, 125.0);
        assert_eq!(stats.avg_diastolic, 82.0);
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let store = InMemoryStore::new();
        let service = service(store.clone());
        let request = CreateEntryRequest { weight: 70.0, systolic: 120, diastolic: 80 };

        service.add_entry(request).await.unwrap();
        service.add_entry(request).await.unwrap();

        let entries = store.load().await;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[tokio::test]
    async fn test_submit_entry_parses_strings() {
        let store = InMemoryStore::new();
        let service = service(store.clone());

        let entry = service
            .submit_entry(&EntryInput::new(" 82.3 ", "131", "85"))
            .await
            .unwrap();

        assert_eq!(entry.weight, 82.3);
        assert_eq!(entry.systolic, 131);
        assert_eq!(entry.diastolic, 85);
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_entry_rejects_non_numeric_input() {
        let store = InMemoryStore::with_entries(vec![record("2024-06-01", 70.0, 120, 80)]);
        let service = service(store.clone());

        let err = service
            .submit_entry(&EntryInput::new("heavy", "120.5", "80"))
            .await
            .unwrap_err();

        match err {
            EntryServiceError::ValidationError(msg) => {
                assert!(msg.contains("weight"));
                assert!(msg.contains("systolic"));
                assert!(!msg.contains("diastolic"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(store.load().await.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_entry_rejects_missing_fields() {
        let service = service(InMemoryStore::new());

        let err = service.submit_entry(&EntryInput::default()).await.unwrap_err();

        assert!(matches!(err, EntryServiceError::ValidationError(_)));
        assert!(err.to_string().contains("Weight is required"));
    }

    #[test]
    fn test_validate_input_rejects_non_finite_weight() {
        let service = service(InMemoryStore::new());

        for weight in ["NaN", "inf", "-infinity"] {
            let result = service.validate_input(&EntryInput::new(weight, "120", "80"));
            assert!(matches!(result, Err(EntryServiceError::ValidationError(_))), "{}", weight);
        }
    }

    #[tokio::test]
    async fn test_add_entry_rejects_nan_weight() {
        let mut store = MockStore::new();
        store.expect_load().never();
        store.expect_save().never();
        let service = EntryService::with_clock(store, fixed_day);

        let result = service
            .add_entry(CreateEntryRequest { weight: f64::NAN, systolic: 120, diastolic: 80 })
            .await;

        assert!(matches!(result, Err(EntryServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn test_delete_first_entry() {
        let a = record("2024-06-01", 70.0, 120, 80);
        let b = record("2024-06-02", 71.0, 121, 81);
        let store = InMemoryStore::with_entries(vec![a.clone(), b.clone()]);
        let service = service(store.clone());

        let removed = service.delete_entry(0).await.unwrap();

        assert_eq!(removed.map(|e| e.date), Some("2024-06-01".to_string()));
        assert_eq!(store.load().await, vec![b]);
    }

    #[tokio::test]
    async fn test_delete_shifts_later_entries_down() {
        let entries = vec![
            record("2024-06-01", 70.0, 120, 80),
            record("2024-06-02", 71.0, 121, 81),
            record("2024-06-03", 72.0, 122, 82),
        ];
        let store = InMemoryStore::with_entries(entries.clone());
        let service = service(store.clone());

        service.delete_entry(1).await.unwrap();

        let listed = service.list_entries().await;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].index, 1);
        assert_eq!(listed[1].entry.date, "2024-06-03");
    }

    #[tokio::test]
    async fn test_delete_out_of_range_is_noop_without_write() {
        let entries = vec![
            record("2024-06-01", 70.0, 120, 80),
            record("2024-06-02", 71.0, 121, 81),
        ];
        let loaded = entries.clone();

        let mut store = MockStore::new();
        store.expect_load().times(1).returning(move || loaded.clone());
        store.expect_save().never();
        let service = EntryService::with_clock(store, fixed_day);

        assert_eq!(service.delete_entry(5).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_out_of_range_leaves_collection_unchanged() {
        let entries = vec![
            record("2024-06-01", 70.0, 120, 80),
            record("2024-06-02", 71.0, 121, 81),
        ];
        let store = InMemoryStore::with_entries(entries.clone());
        let service = service(store.clone());

        service.delete_entry(2).await.unwrap();
        service.delete_entry(usize::MAX).await.unwrap();

        assert_eq!(store.load().await, entries);
    }

    #[tokio::test]
    async fn test_add_entry_saves_full_collection() {
        let existing = vec![record("2024-06-01", 70.0, 120, 80)];
        let loaded = existing.clone();

        let mut store = MockStore::new();
        store.expect_load().times(1).returning(move || loaded.clone());
        store
            .expect_save()
            .withf(|entries: &[EntryRecord]| {
                entries.len() == 2
                    && entries[0].date == "2024-06-01"
                    && entries[1] == record("2024-06-15", 68.2, 135, 88)
            })
            .times(1)
            .returning(|_| Ok(()));
        let service = EntryService::with_clock(store, fixed_day);

        service
            .add_entry(CreateEntryRequest { weight: 68.2, systolic: 135, diastolic: 88 })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_storage_failure_is_reported() {
        let service = EntryService::with_clock(
            FailingStore::with_entries(vec![record("2024-06-01", 70.0, 120, 80)]),
            fixed_day,
        );

        let add = service
            .add_entry(CreateEntryRequest { weight: 70.0, systolic: 120, diastolic: 80 })
            .await;
        assert!(matches!(add, Err(EntryServiceError::StorageError(_))));

        let delete = service.delete_entry(0).await;
        assert!(matches!(delete, Err(EntryServiceError::StorageError(_))));

        // Nothing was committed
        assert_eq!(service.list_entries().await.len(), 1);
    }

    #[tokio::test]
    async fn test_list_entries_attaches_classification() {
        let store = InMemoryStore::with_entries(vec![
            record("2024-06-01", 70.0, 119, 79),
            record("2024-06-02", 70.0, 110, 85),
        ]);
        let service = service(store);

        let listed = service.list_entries().await;

        assert_eq!(listed[0].index, 0);
        assert_eq!(listed[0].classification.label, "Normal");
        assert_eq!(listed[1].classification.label, "Stage 1 Hypertension");
        assert_eq!(listed[1].classification.symbol, "⚠️⚠️");
    }

    #[tokio::test]
    async fn test_summary_on_empty_store() {
        let service = service(InMemoryStore::new());
        assert_eq!(service.summary().await, Summary::NoData);
    }
}
