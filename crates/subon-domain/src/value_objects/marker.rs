//! Scheduling markers and method identities

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::value_objects::reactive::ReactiveShape;

/// Stable identity of a method that may carry a scheduling marker
///
/// By convention `Type::method`, e.g. `InvoiceService::invoices`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MethodId(String);

impl MethodId {
    /// Create a method identity, rejecting blank names
    pub fn new<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid_marker("method identity must not be empty"));
        }
        Ok(Self(name))
    }

    /// The method name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for MethodId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Declaration that a method's reactive value runs on the scheduler
/// registered under `key`
///
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchedulingMarker {
    key: String,
}

impl SchedulingMarker {
    /// Create a marker; the key must be a non-blank registry key
    pub fn new<S: Into<String>>(key: S) -> Result<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(Error::invalid_marker("scheduler key must not be empty"));
        }
        Ok(Self { key })
    }

    /// Registry key of the scheduler
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl TryFrom<String> for SchedulingMarker {
    type Error = Error;

    fn try_from(key: String) -> Result<Self> {
        Self::new(key)
    }
}

impl From<SchedulingMarker> for String {
    fn from(marker: SchedulingMarker) -> Self {
        marker.key
    }
}

impl fmt::Display for SchedulingMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@subscribe_on({})", self.key)
    }
}

/// A method together with its marker and declared return shape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedMethod {
    /// Method identity
    pub method: MethodId,
    /// Attached marker
    pub marker: SchedulingMarker,
    /// Reactive shape the method declares it returns
    pub shape: ReactiveShape,
}

impl MarkedMethod {
    /// Attach `key` to `method`
    pub fn new<M: Into<String>, K: Into<String>>(method: M, key: K, shape: ReactiveShape) -> Result<Self> {
        Ok(Self {
            method: MethodId::new(method)?,
            marker: SchedulingMarker::new(key)?,
            shape,
        })
    }
}
