use async_trait::async_trait;

use crate::models::entry::EntryRecord;
use super::errors::RepositoryError;

/// Persistence contract for the full, ordered entry collection.
///
/// The collection is always read and written as a whole. Reads are
/// lenient: storage that is missing, unreadable or malformed loads as an
/// empty collection and is never reported to the caller. Writes replace
/// everything previously stored and do report failures.
#[async_trait]
pub trait EntryStoreTrait: Send + Sync {
    /// Load every stored entry in insertion order
    async fn load(&self) -> Vec<EntryRecord>;

    /// Replace the stored collection with `entries`
    async fn save(&self, entries: &[EntryRecord]) -> Result<(), RepositoryError>;

    /// Inspect the backing storage without loading it for use.
    ///
    /// Returns `Ok(true)` when the storage is readable (or simply absent),
    /// `Ok(false)` when it exists but would be discarded as malformed, and
    /// an error when it cannot be read at all.
    async fn probe(&self) -> Result<bool, String>;
}

/// Store doubles for testing
#[cfg(any(test, feature = "mock"))]
pub mod tests {
    use super::*;
    use std::io;

    /// Store that serves a fixed collection and refuses every write
    #[derive(Debug, Default, Clone)]
    pub struct FailingStore {
        entries: Vec<EntryRecord>,
    }

    impl FailingStore {
        /// Create a failing store with no entries
        pub fn new() -> Self {
            Self::default()
        }

        /// Create a failing store that still loads `entries`
        pub fn with_entries(entries: Vec<EntryRecord>) -> Self {
            Self { entries }
        }
    }

    #[async_trait]
    impl EntryStoreTrait for FailingStore {
        async fn load(&self) -> Vec<EntryRecord> {
            self.entries.clone()
        }

        async fn save(&self, _entries: &[EntryRecord]) -> Result<(), RepositoryError> {
            Err(RepositoryError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "store is read-only",
            )))
        }

        async fn probe(&self) -> Result<bool, String> {
            Err("store is read-only".to_string())
        }
    }
}
