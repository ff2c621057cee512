use std::sync::{Arc, Mutex};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::entry::EntryRecord;
use super::entries::EntryStoreTrait;
use super::errors::RepositoryError;

/// In-memory storage implementation for health entries.
///
/// Clones share the same collection. The lock is only held for the
/// duration of a single `load` or `save`, never across both.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    /// Storage for health entries
    entries: Arc<Mutex<Vec<EntryRecord>>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an in-memory store seeded with `entries`
    pub fn with_entries(entries: Vec<EntryRecord>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(entries)),
        }
    }
}

#[async_trait]
impl EntryStoreTrait for InMemoryStore {
    async fn load(&self) -> Vec<EntryRecord> {
        match self.entries.lock() {
            Ok(store) => store.clone(),
            Err(poisoned) => {
                warn!("In-memory store lock was poisoned, reading last written state");
                poisoned.into_inner().clone()
            }
        }
    }

    async fn save(&self, entries: &[EntryRecord]) -> Result<(), RepositoryError> {
        let mut store = self.entries.lock()?;
        debug!("Replacing in-memory collection with {} entries", entries.len());
        *store = entries.to_vec();
        Ok(())
    }

    async fn probe(&self) -> Result<bool, String> {
        self.entries
            .lock()
            .map(|_| true)
            .map_err(|e| format!("In-memory store unavailable: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, weight: f64) -> EntryRecord {
        EntryRecord {
            date: date.to_string(),
            weight,
            systolic: 120,
            diastolic: 80,
        }
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_replaces_contents() {
        let store = InMemoryStore::with_entries(vec![record("2024-01-01", 70.0)]);

        store.save(&[record("2024-02-01", 71.0), record("2024-02-02", 72.0)]).await.unwrap();

        let loaded = store.load().await;
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].date, "2024-02-01");
        assert_eq!(loaded[1].weight, 72.0);
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let store = InMemoryStore::new();
        let clone = store.clone();

        clone.save(&[record("2024-01-01", 70.0)]).await.unwrap();

        assert_eq!(store.load().await.len(), 1);
    }
}
