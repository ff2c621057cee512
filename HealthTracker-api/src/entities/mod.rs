// Public entities for the HealthTracker JSON API
// This module contains data structures that are shared across the application boundary

// Entry payloads and responses
pub mod entry;

// Common entities for error handling
pub mod common;
