pub mod classifier;
pub mod entries;
pub mod statistics;

// Domain services
// This module contains business logic implementations.

// Re-export service traits, pure functions and factory functions
pub use classifier::{categorize_blood_pressure, classify};
pub use entries::{
    create_default_entry_service, EntryService, EntryServiceError, EntryServiceTrait,
};
pub use statistics::aggregate;
