//! Marker Registry System
//!
//! Methods declare their scheduling marker once, at compile time, through
//! the `linkme` distributed slice [`SCHEDULING_MARKERS`]. At startup the
//! slice is folded into a [`crate::MarkerCatalog`], so per-call marker
//! discovery is a map lookup.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Marker Registration Flow                     │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Service declares:  #[linkme::distributed_slice(             │
//! │                            SCHEDULING_MARKERS)]                 │
//! │                        static ENTRY: SchedulingMarkerEntry = .. │
//! │                              ↓                                  │
//! │  2. Catalog folds:     MarkerCatalog::from_registered()         │
//! │                              ↓                                  │
//! │  3. Rewriter queries:  catalog.get("InvoiceService::invoices")  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use subon_application::ports::registry::{SchedulingMarkerEntry, SCHEDULING_MARKERS};
//! use subon_domain::ReactiveShape;
//!
//! #[linkme::distributed_slice(SCHEDULING_MARKERS)]
//! static INVOICES: SchedulingMarkerEntry = SchedulingMarkerEntry {
//!     method: "InvoiceService::invoices",
//!     key: "customScheduler",
//!     shape: ReactiveShape::Multi,
//! };
//! ```

pub mod markers;

pub use markers::{SCHEDULING_MARKERS, SchedulingMarkerEntry, list_scheduling_markers};
