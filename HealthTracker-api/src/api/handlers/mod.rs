pub mod entries;
pub mod health;
pub mod pages;

// Re-export handlers for easier imports
pub use entries::{create_entry, delete_entry, get_stats, list_entries, SharedEntryService};
pub use health::health_check;
