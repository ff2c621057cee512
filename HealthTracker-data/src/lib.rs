// HealthTracker Data
// This crate handles persistence of the health entry collection

// Persistence abstraction and its implementations
pub mod repository;

// Data storage models
pub mod models;
