//! Named service registration.
//!
//! # Design Decisions
//! - Services are constructed by ordinary factories with their dependencies
//!   passed explicitly; no reflection, no runtime class synthesis
//! - The only ambient capability is the logger, issued by the context
//! - Duplicate ids are a configuration fault, rejected at registration

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::services::logger::Logger;

/// A named service owned by the registry.
pub trait AppService: Send + Sync {
    /// Unique service identifier.
    fn service_id(&self) -> &str;
}

/// Error type for service registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// A service with this id is already registered.
    #[error("service {id:?} is already registered")]
    Duplicate { id: String },
}

/// Dependencies handed to service constructors.
pub struct ServiceContext {
    app_id: &'static str,
}

impl ServiceContext {
    pub fn new(app_id: &'static str) -> Self {
        Self { app_id }
    }

    /// Issue a logger named after the service being constructed.
    pub fn logger(&self, service: &str) -> Logger {
        Logger::named(format!("{}.{}", self.app_id, service))
    }
}

/// Registry of constructed services, keyed by id.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<String, Arc<dyn AppService>>,
    /// Registration order, for stable listings.
    order: Vec<String>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructed service under its id.
    pub fn register(&mut self, service: Arc<dyn AppService>) -> Result<(), ServiceError> {
        let id = service.service_id().to_string();
        if self.services.contains_key(&id) {
            return Err(ServiceError::Duplicate { id });
        }
        tracing::debug!(service = %id, "Service registered");
        self.order.push(id.clone());
        self.services.insert(id, service);
        Ok(())
    }

    /// Look up a service by id.
    pub fn get(&self, id: &str) -> Option<Arc<dyn AppService>> {
        self.services.get(id).cloned()
    }

    /// Service ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered services.
    pub fn count(&self) -> usize {
        self.services.len()
    }
}
