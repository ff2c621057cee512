// Repository module structure
pub mod errors;
mod entries;
mod in_memory;
mod json_file;

// Re-export commonly used types
pub use errors::RepositoryError;
pub use entries::EntryStoreTrait;
pub use in_memory::InMemoryStore;
pub use json_file::JsonFileStore;

// Re-export test modules for both testing and when mock feature is enabled
#[cfg(any(test, feature = "mock"))]
pub use entries::tests;
