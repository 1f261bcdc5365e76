//! Dependency registry and composition root
//!
//! - [`registry`]: string-keyed component registry the resolver reads from
//! - [`bootstrap`]: builds schedulers, catalog and rewriter from configuration

pub mod bootstrap;
pub mod registry;

pub use bootstrap::SchedulingContext;
pub use registry::ComponentRegistry;
