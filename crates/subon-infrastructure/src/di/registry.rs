//! DI Component Registry
//!
//! Service locator mapping symbolic keys to managed components. Schedulers
//! are registered here by the integrator (or by bootstrap from
//! configuration) and looked up by the scheduler resolver.

use std::any::{Any, type_name};
use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use subon_domain::error::{Error, Result};
use subon_domain::ports::{ComponentEntry, ComponentLookup, IntoComponentEntry, Scheduler};
use tracing::debug;

/// Component registry keyed by name
///
/// Reads never block writers on other keys; lookups clone the entry out of
/// the map.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    components: DashMap<String, ComponentEntry>,
}

impl ComponentRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component under `key`
    ///
    /// Schedulers, owned or as `Arc<S>`, are registered with their scheduler
    /// capability. Plain values are passed as [`ComponentEntry::new`].
    pub fn register<C: IntoComponentEntry>(&self, key: &str, component: C) -> Result<()> {
        self.register_entry(key, component.into_component_entry())
    }

    /// Register a scheduler under `key`
    pub fn register_scheduler(&self, key: &str, scheduler: Arc<dyn Scheduler>) -> Result<()> {
        self.register_entry(key, ComponentEntry::shared_scheduler(scheduler))
    }

    /// Register a prepared entry under `key`
    ///
    /// Fails with [`Error::DuplicateComponent`] if `key` is taken.
    pub fn register_entry(&self, key: &str, entry: ComponentEntry) -> Result<()> {
        match self.components.entry(key.to_owned()) {
            Entry::Occupied(_) => Err(Error::DuplicateComponent { key: key.to_owned() }),
            Entry::Vacant(slot) => {
                debug!(key, type_name = entry.type_name(), "Component registered");
                slot.insert(entry);
                Ok(())
            }
        }
    }

    /// Get the component under `key` as a `T`
    pub fn get<T: Any + Send + Sync>(&self, key: &str) -> Result<Arc<T>> {
        let entry = self
            .components
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::ComponentNotFound { key: key.to_owned() })?;

        entry.downcast::<T>().ok_or_else(|| Error::ComponentTypeMismatch {
            key: key.to_owned(),
            expected_type: type_name::<T>().to_owned(),
            actual_type: entry.type_name().to_owned(),
        })
    }

    /// Check if a component is registered under `key`
    pub fn has(&self, key: &str) -> bool {
        self.components.contains_key(key)
    }

    /// Remove the component under `key`
    pub fn remove(&self, key: &str) -> Result<ComponentEntry> {
        self.components
            .remove(key)
            .map(|(_, entry)| entry)
            .ok_or_else(|| Error::ComponentNotFound { key: key.to_owned() })
    }

    /// Get the number of registered components
    pub fn count(&self) -> usize {
        self.components.len()
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.components.iter().map(|entry| entry.key().clone()).collect();
        keys.sort();
        keys
    }

    /// Clear all components from the registry
    pub fn clear(&self) {
        self.components.clear();
    }
}

impl ComponentLookup for ComponentRegistry {
    fn lookup(&self, key: &str) -> Option<ComponentEntry> {
        self.components.get(key).map(|entry| entry.value().clone())
    }
}
