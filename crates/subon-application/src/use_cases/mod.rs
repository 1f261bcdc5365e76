//! Use cases
//!
//! - [`resolver`]: marker key → scheduler, with the capability check
//! - [`rewriter`]: interception of marked methods
//! - [`combinators`]: decorator form for call sites without a catalog

pub mod combinators;
pub mod resolver;
pub mod rewriter;

pub use combinators::{with_scheduler, with_scheduler_multi, with_scheduler_single};
pub use resolver::{SchedulerLookup, SchedulerResolver};
pub use rewriter::{InvocationPhase, InvocationRewriter, MarkerViolation};
