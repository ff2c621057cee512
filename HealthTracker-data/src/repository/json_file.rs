use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, warn};

use crate::models::entry::EntryRecord;
use super::entries::EntryStoreTrait;
use super::errors::RepositoryError;

/// Indentation used for the on-disk JSON document
const INDENT: &[u8] = b"    ";

/// Entry store backed by a single JSON file holding an array of entries.
///
/// Writes go to a sibling `.tmp` file that is renamed over the target, so a
/// crash mid-write leaves the previous collection in place.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`. The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    /// Read and decode the backing file. `Ok(None)` means the file is absent.
    async fn read_records(&self) -> Result<Option<Vec<EntryRecord>>, RepositoryError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn encode(entries: &[EntryRecord]) -> Result<Vec<u8>, RepositoryError> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        entries.serialize(&mut serializer)?;
        Ok(buf)
    }
}

#[async_trait]
impl EntryStoreTrait for JsonFileStore {
    async fn load(&self) -> Vec<EntryRecord> {
        match self.read_records().await {
            Ok(Some(entries)) => {
                debug!("Loaded {} entries from {}", entries.len(), self.path.display());
                entries
            }
            Ok(None) => {
                debug!("No data file at {}, starting empty", self.path.display());
                Vec::new()
            }
            Err(e) => {
                warn!("Discarding unreadable data file {}: {}", self.path.display(), e);
                Vec::new()
            }
        }
    }

    async fn save(&self, entries: &[EntryRecord]) -> Result<(), RepositoryError> {
        let bytes = Self::encode(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        let written = match fs::write(&temp_path, bytes).await {
            Ok(()) => fs::rename(&temp_path, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            if let Err(cleanup) = fs::remove_file(&temp_path).await {
                debug!("Could not remove {}: {}", temp_path.display(), cleanup);
            }
            return Err(e.into());
        }

        debug!("Saved {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }

    async fn probe(&self) -> Result<bool, String> {
        match self.read_records().await {
            Ok(_) => Ok(true),
            Err(RepositoryError::Serialization(_)) => Ok(false),
            Err(e) => Err(format!("Cannot read {}: {}", self.path.display(), e)),
        }
    }
}
