//! Domain Port Interfaces
//!
//! Contracts consumed by the application layer and implemented by
//! infrastructure.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`Scheduler`] | Execution context accepting boxed tasks |
//! | [`ComponentLookup`] | Key-based component registry queried for schedulers |

pub mod registry;
pub mod scheduler;

pub use registry::{ComponentEntry, ComponentLookup, IntoComponentEntry};
pub use scheduler::{ScheduledTask, Scheduler, TaskHandle};
