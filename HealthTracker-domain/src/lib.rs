// HealthTracker Domain
// This crate contains the business logic for the HealthTracker application

// Services that implement business logic
pub mod services;

// Domain entities
pub mod entities;

// Health checks and system status
pub mod health;

// Re-export the repository module from health_tracker_data for convenience
pub use health_tracker_data::repository;

// Testing utilities - only available with mock feature
#[cfg(any(test, feature = "mock"))]
pub mod testing;
