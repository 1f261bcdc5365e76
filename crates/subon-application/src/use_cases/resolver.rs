//! Scheduler Resolver
//!
//! Turns a scheduling marker into a scheduler handle by querying the
//! component registry and checking that the entry is a scheduler.
//!
//! The resolver keeps no state of its own: repeated resolution of one key
//! against an unchanged registry yields the same outcome, and caching is
//! left to whoever owns the registry.

use std::fmt;
use std::sync::Arc;

use subon_domain::error::{Error, Result};
use subon_domain::ports::{ComponentLookup, Scheduler};
use subon_domain::value_objects::SchedulingMarker;
use tracing::trace;

/// Outcome of one registry query for a scheduler key
#[derive(Debug, Clone)]
pub enum SchedulerLookup {
    /// The key names a scheduler
    Found(Arc<dyn Scheduler>),
    /// The registry has no entry for the key
    NotFound,
    /// The entry exists but is of the given runtime type
    WrongType(&'static str),
}

impl SchedulerLookup {
    /// Convert into a result, attributing failures to `key`
    pub fn into_result(self, key: &str) -> Result<Arc<dyn Scheduler>> {
        match self {
            Self::Found(scheduler) => Ok(scheduler),
            Self::NotFound => Err(Error::scheduler_not_found(key)),
            Self::WrongType(actual_type) => Err(Error::scheduler_type_mismatch(key, actual_type)),
        }
    }
}

/// Resolves scheduling markers against a component registry
#[derive(Clone)]
pub struct SchedulerResolver {
    registry: Arc<dyn ComponentLookup>,
}

impl SchedulerResolver {
    /// Create a resolver over `registry`
    pub fn new(registry: Arc<dyn ComponentLookup>) -> Self {
        Self { registry }
    }

    /// Query the registry for `key` without turning the outcome into an error
    pub fn lookup(&self, key: &str) -> SchedulerLookup {
        let Some(entry) = self.registry.lookup(key) else {
            return SchedulerLookup::NotFound;
        };
        match entry.as_scheduler() {
            Some(scheduler) => SchedulerLookup::Found(scheduler),
            None => SchedulerLookup::WrongType(entry.type_name()),
        }
    }

    /// Resolve the scheduler a marker refers to
    pub fn resolve(&self, marker: &SchedulingMarker) -> Result<Arc<dyn Scheduler>> {
        self.resolve_key(marker.key())
    }

    /// Resolve the scheduler registered under `key`
    ///
    /// # Errors
    ///
    /// - [`Error::SchedulerNotFound`] when nothing is registered under `key`
    /// - [`Error::SchedulerTypeMismatch`] when the entry is not a scheduler
    pub fn resolve_key(&self, key: &str) -> Result<Arc<dyn Scheduler>> {
        let outcome = self.lookup(key);
        trace!(key, outcome = outcome.label(), "scheduler.resolve");
        outcome.into_result(key)
    }
}

impl SchedulerLookup {
    fn label(&self) -> &'static str {
        match self {
            Self::Found(_) => "found",
            Self::NotFound => "not_found",
            Self::WrongType(_) => "wrong_type",
        }
    }
}

impl fmt::Debug for SchedulerResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchedulerResolver").finish_non_exhaustive()
    }
}
