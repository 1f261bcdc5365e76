//! Application Layer - subon
//!
//! Resolves scheduling markers against the component registry and rewrites
//! the reactive values returned by marked methods so that they run on the
//! resolved scheduler.
//!
//! ## Flow
//!
//! ```text
//! caller ──► InvocationRewriter ──► SchedulerResolver ──► ComponentLookup
//!                  │                        │
//!                  │◄── Arc<dyn Scheduler> ─┘  (or SchedulerNotFound /
//!                  │                             SchedulerTypeMismatch)
//!                  ├──► original method ──► raw ReactiveValue
//!                  └──► bind_single / bind_multi ──► scheduled value ──► caller
//! ```
//!
//! ## Modules
//!
//! - `ports::registry`: compile-time marker registration (linkme)
//! - `domain_services`: scheduler binding operators and the marker catalog
//! - `use_cases`: the resolver, the rewriter and the decorator combinators
//!
//! ## Dependencies
//!
//! This crate depends only on `subon-domain` and pure async libraries. It
//! never names a concrete scheduler or registry.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
