//! Application ports
//!
//! Registration points that other crates extend at compile time.

pub mod registry;

pub use registry::{SCHEDULING_MARKERS, SchedulingMarkerEntry, list_scheduling_markers};
