//! Component registry port
//!
//! The registry maps symbolic keys to managed objects. The core only reads
//! from it; registration and lifecycle belong to the integrator.

use std::any::{Any, type_name};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use crate::ports::scheduler::Scheduler;

/// One registered component together with its runtime type tag
///
/// Scheduler entries also fill the scheduler capability slot, which is what
/// [`ComponentEntry::as_scheduler`] reads.
#[derive(Clone)]
pub struct ComponentEntry {
    type_name: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
    scheduler: Option<Arc<dyn Scheduler>>,
}

impl ComponentEntry {
    /// Wrap a plain component
    ///
    /// A concrete scheduler wrapped here is stored as a plain value and
    /// fails the capability check; use [`ComponentEntry::scheduler`] or
    /// [`IntoComponentEntry`] for schedulers. An `Arc<dyn Scheduler>` is
    /// recognised.
    pub fn new<T: Any + Send + Sync>(component: T) -> Self {
        let instance: Arc<dyn Any + Send + Sync> = Arc::new(component);
        let scheduler = instance.downcast_ref::<Arc<dyn Scheduler>>().map(Arc::clone);
        Self {
            type_name: type_name::<T>(),
            instance,
            scheduler,
        }
    }

    /// Wrap a scheduler so that it passes the scheduler capability check
    ///
    /// The entry can still be fetched as `S` through [`ComponentEntry::downcast`].
    pub fn scheduler<S: Scheduler + 'static>(scheduler: S) -> Self {
        Self::shared(Arc::new(scheduler))
    }

    /// Wrap a shared concrete scheduler
    pub fn shared<S: Scheduler + 'static>(scheduler: Arc<S>) -> Self {
        let capability: Arc<dyn Scheduler> = Arc::clone(&scheduler) as Arc<dyn Scheduler>;
        Self {
            type_name: type_name::<S>(),
            instance: scheduler,
            scheduler: Some(capability),
        }
    }

    /// Wrap an already type-erased scheduler
    ///
    /// The entry downcasts to `Arc<dyn Scheduler>`.
    pub fn shared_scheduler(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            type_name: type_name::<Arc<dyn Scheduler>>(),
            instance: Arc::new(Arc::clone(&scheduler)),
            scheduler: Some(scheduler),
        }
    }

    /// Runtime type name recorded at registration
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Downcast the stored component
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        Arc::clone(&self.instance).downcast::<T>().ok()
    }

    /// The stored scheduler, if this entry satisfies the scheduler capability
    pub fn as_scheduler(&self) -> Option<Arc<dyn Scheduler>> {
        self.scheduler.clone()
    }
}

/// Conversion into a registry entry
///
/// Schedulers, owned or behind an `Arc`, become scheduler entries. Other
/// components are wrapped explicitly with [`ComponentEntry::new`].
pub trait IntoComponentEntry {
    /// Build the entry
    fn into_component_entry(self) -> ComponentEntry;
}

impl IntoComponentEntry for ComponentEntry {
    fn into_component_entry(self) -> ComponentEntry {
        self
    }
}

impl<S: Scheduler + 'static> IntoComponentEntry for S {
    fn into_component_entry(self) -> ComponentEntry {
        ComponentEntry::scheduler(self)
    }
}

impl<S: Scheduler + 'static> IntoComponentEntry for Arc<S> {
    fn into_component_entry(self) -> ComponentEntry {
        ComponentEntry::shared(self)
    }
}

impl fmt::Debug for ComponentEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentEntry")
            .field("type_name", &self.type_name)
            .field("scheduler", &self.scheduler.as_ref().map(|s| s.name()))
            .finish_non_exhaustive()
    }
}

/// Read side of the dependency registry
///
/// Lookups must not block; implementations synchronise internally.
pub trait ComponentLookup: Send + Sync {
    /// Find the component registered under `key`
    fn lookup(&self, key: &str) -> Option<ComponentEntry>;
}

impl ComponentLookup for HashMap<String, ComponentEntry> {
    fn lookup(&self, key: &str) -> Option<ComponentEntry> {
        self.get(key).cloned()
    }
}

impl ComponentLookup for BTreeMap<String, ComponentEntry> {
    fn lookup(&self, key: &str) -> Option<ComponentEntry> {
        self.get(key).cloned()
    }
}

impl<L: ComponentLookup + ?Sized> ComponentLookup for Arc<L> {
    fn lookup(&self, key: &str) -> Option<ComponentEntry> {
        (**self).lookup(key)
    }
}
