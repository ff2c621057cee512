//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;
use std::fmt;
use async_trait::async_trait;

use health_tracker_data::repository::EntryStoreTrait;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the entry storage
    /// Returns true if the storage is healthy, false if degraded
    /// Returns an error if the storage could not be read at all
    async fn check_storage_status(&self) -> Result<bool, String>;
}

/// Health service that reports on the entry store
#[derive(Debug, Clone)]
pub struct StoreHealthService<S> {
    store: S,
}

impl<S> StoreHealthService<S> {
    /// Create a health service watching `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

/// Roll component statuses up into one system status
pub fn overall_status<'a>(components: impl IntoIterator<Item = &'a HealthComponent>) -> SystemStatus {
    let mut status = SystemStatus::Healthy;
    for component in components {
        match component.status {
            ComponentStatus::Unhealthy => return SystemStatus::Unhealthy,
            ComponentStatus::Degraded => status = SystemStatus::Degraded,
            ComponentStatus::Healthy => {}
        }
    }
    status
}

#[async_trait]
impl<S: EntryStoreTrait + fmt::Debug> HealthServiceTrait for StoreHealthService<S> {
    async fn get_system_health(&self) -> SystemHealth {
        let storage = match self.check_storage_status().await {
            Ok(true) => HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
            Ok(false) => HealthComponent {
                status: ComponentStatus::Degraded,
                details: Some("Data file is malformed; it reads as empty and the next save replaces it".to_string()),
            },
            Err(e) => HealthComponent {
                status: ComponentStatus::Unhealthy,
                details: Some(e),
            },
        };

        let mut components = HashMap::new();
        components.insert("storage".to_string(), storage);

        // API component (always healthy when this code runs)
        components.insert(
            "api".to_string(),
            HealthComponent {
                status: ComponentStatus::Healthy,
                details: None,
            },
        );

        SystemHealth {
            status: overall_status(components.values()),
            components,
        }
    }

    async fn check_storage_status(&self) -> Result<bool, String> {
        self.store.probe().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use health_tracker_data::repository::tests::FailingStore;
    use health_tracker_data::repository::{InMemoryStore, JsonFileStore};

    #[tokio::test]
    async fn test_healthy_store() {
        let health = StoreHealthService::new(InMemoryStore::new()).get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
        assert!(health.components.contains_key("storage"));
        assert!(health.components.contains_key("api"));
    }

    #[tokio::test]
    async fn test_unreadable_store_is_unhealthy() {
        let health = StoreHealthService::new(FailingStore::new()).get_system_health().await;

        assert_eq!(health.status, SystemStatus::Unhealthy);
        assert_eq!(health.components["storage"].status, ComponentStatus::Unhealthy);
    }

    #[tokio::test]
    async fn test_missing_data_file_is_healthy() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("health_data.json"));
        let health = StoreHealthService::new(store).get_system_health().await;

        assert_eq!(health.status, SystemStatus::Healthy);
    }

    #[test]
    fn test_overall_status_prefers_worst_component() {
        let healthy = HealthComponent { status: ComponentStatus::Healthy, details: None };
        let degraded = HealthComponent { status: ComponentStatus::Degraded, details: None };
        let unhealthy = HealthComponent { status: ComponentStatus::Unhealthy, details: None };

        assert_eq!(overall_status([&healthy, &healthy]), SystemStatus::Healthy);
        assert_eq!(overall_status([&healthy, &degraded]), SystemStatus::Degraded);
        assert_eq!(overall_status([&degraded, &unhealthy, &healthy]), SystemStatus::Unhealthy);
    }
}
