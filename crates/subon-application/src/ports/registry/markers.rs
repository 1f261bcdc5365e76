//! Compile-time scheduling marker registry

use subon_domain::error::Result;
use subon_domain::value_objects::{MarkedMethod, ReactiveShape};

/// Registry entry attaching a scheduling marker to a method
///
/// Each marked method submits one entry with
/// `#[linkme::distributed_slice(SCHEDULING_MARKERS)]`.
#[derive(Debug)]
pub struct SchedulingMarkerEntry {
    /// Method identity, e.g. `"InvoiceService::invoices"`
    pub method: &'static str,
    /// Registry key of the scheduler
    pub key: &'static str,
    /// Reactive shape the method returns
    pub shape: ReactiveShape,
}

impl SchedulingMarkerEntry {
    /// Validate the entry into a marked method
    pub fn to_marked(&self) -> Result<MarkedMethod> {
        MarkedMethod::new(self.method, self.key, self.shape)
    }
}

#[linkme::distributed_slice]
pub static SCHEDULING_MARKERS: [SchedulingMarkerEntry] = [..];

/// List all compile-time registered markers as `(method, key)` pairs
///
/// Sorted by method so output is stable for CLI listings.
pub fn list_scheduling_markers() -> Vec<(&'static str, &'static str)> {
    let mut markers: Vec<_> = SCHEDULING_MARKERS
        .iter()
        .map(|entry| (entry.method, entry.key))
        .collect();
    markers.sort_unstable();
    markers
}
