//! # subon
//!
//! Run the reactive values returned by marked methods on named schedulers.
//!
//! A method is marked with the registry key of a scheduler. Each call goes
//! through the invocation rewriter, which resolves the key against the
//! component registry and either binds the returned single- or multi-value
//! pipeline to that scheduler or, when the key is missing or names something
//! other than a scheduler, returns a failed pipeline without calling the
//! method at all.
//!
//! ## Example
//!
//! ```ignore
//! use subon::infrastructure::config::{ConfigBuilder, SchedulerConfig};
//! use subon::infrastructure::SchedulingContext;
//! use subon::ReactiveShape;
//!
//! let config = ConfigBuilder::new()
//!     .with_scheduler("ioScheduler", SchedulerConfig::thread_pool(4))
//!     .with_marker("InvoiceService::invoices", "ioScheduler", ReactiveShape::Multi)
//!     .build();
//! let context = SchedulingContext::from_config(config)?;
//! context.validate()?;
//!
//! let invoices = context
//!     .rewriter()
//!     .multi("InvoiceService::invoices", || service.invoices());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Scheduler and registry ports, markers, reactive shapes, errors
//! - `application` - Resolver, marker catalog, binding and rewriter
//! - `infrastructure` - Concrete schedulers, registry, config, logging
//! - [`cli`] - The `subon` command line

pub mod cli;

/// Domain layer - ports, value objects and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use subon_domain::*;
}

/// Application layer - resolution and invocation rewriting
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use subon_application::*;
}

/// Infrastructure layer - schedulers, registry, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use subon_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the engine entry points
pub use application::{InvocationRewriter, MarkerCatalog, SchedulerResolver, with_scheduler, with_scheduler_multi, with_scheduler_single};
pub use infrastructure::{ComponentRegistry, SchedulingContext};
