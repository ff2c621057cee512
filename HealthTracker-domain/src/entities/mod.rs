// Domain entities and value objects
pub mod classification;
pub mod conversions;
pub mod entry;
pub mod stats;

// Re-export common types for easier imports
pub use classification::{BloodPressureCategory, Classification};
pub use entry::{ClassifiedEntry, CreateEntryRequest, Entry, EntryInput, DATE_FORMAT};
pub use stats::{EntryStats, Summary};
