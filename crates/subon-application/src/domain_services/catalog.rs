//! Marker catalog
//!
//! Built once at startup from every marker source, then shared read-only by
//! the rewriter. A method carries at most one marker.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use subon_domain::error::{Error, Result};
use subon_domain::value_objects::{MarkedMethod, ReactiveShape, SchedulingMarker};
use tracing::debug;

use crate::ports::registry::SCHEDULING_MARKERS;

/// Immutable map from method identity to its scheduling marker
#[derive(Debug, Clone, Default)]
pub struct MarkerCatalog {
    methods: HashMap<String, MarkedMethod>,
}

impl MarkerCatalog {
    /// Start building a catalog
    pub fn builder() -> MarkerCatalogBuilder {
        MarkerCatalogBuilder::default()
    }

    /// Catalog holding exactly the compile-time registered markers
    pub fn from_registered() -> Result<Self> {
        Ok(Self::builder().with_registered()?.build())
    }

    /// The marked method, if `method` carries a marker
    pub fn get(&self, method: &str) -> Option<&MarkedMethod> {
        self.methods.get(method)
    }

    /// The marker attached to `method`
    pub fn marker(&self, method: &str) -> Option<&SchedulingMarker> {
        self.get(method).map(|marked| &marked.marker)
    }

    /// Whether `method` carries a marker
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// Number of marked methods
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no method is marked
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Marked methods sorted by method identity
    pub fn methods(&self) -> Vec<&MarkedMethod> {
        let mut methods: Vec<_> = self.methods.values().collect();
        methods.sort_by(|a, b| a.method.cmp(&b.method));
        methods
    }
}

/// Builder collecting markers from registration, configuration and code
#[derive(Debug, Default)]
pub struct MarkerCatalogBuilder {
    methods: HashMap<String, MarkedMethod>,
}

impl MarkerCatalogBuilder {
    /// Attach the marker `key` to `method`
    ///
    /// Fails with [`Error::DuplicateMarker`] if the method is already marked.
    pub fn mark<M: Into<String>, K: Into<String>>(self, method: M, key: K, shape: ReactiveShape) -> Result<Self> {
        self.insert(MarkedMethod::new(method, key, shape)?)
    }

    /// Add an already validated marked method
    pub fn insert(mut self, marked: MarkedMethod) -> Result<Self> {
        match self.methods.entry(marked.method.as_str().to_owned()) {
            Entry::Occupied(_) => Err(Error::duplicate_marker(marked.method.as_str())),
            Entry::Vacant(slot) => {
                debug!(
                    method = %marked.method,
                    key = marked.marker.key(),
                    shape = %marked.shape,
                    "Scheduling marker registered"
                );
                slot.insert(marked);
                Ok(self)
            }
        }
    }

    /// Add every entry of [`SCHEDULING_MARKERS`]
    pub fn with_registered(self) -> Result<Self> {
        SCHEDULING_MARKERS
            .iter()
            .try_fold(self, |builder, entry| builder.insert(entry.to_marked()?))
    }

    /// Freeze the catalog
    pub fn build(self) -> MarkerCatalog {
        MarkerCatalog {
            methods: self.methods,
        }
    }
}
