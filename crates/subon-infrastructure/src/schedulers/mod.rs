//! Concrete schedulers
//!
//! | Scheduler | Backing context |
//! |-----------|-----------------|
//! | [`ThreadPoolScheduler`] | Dedicated multi-thread tokio runtime with named workers |
//! | [`HandleScheduler`] | An existing tokio runtime, through its `Handle` |
//!
//! [`SchedulerFactory`] builds either from a [`crate::config::SchedulerConfig`].

pub mod factory;
pub mod handle;
pub mod task;
pub mod thread_pool;

pub use factory::SchedulerFactory;
pub use handle::HandleScheduler;
pub use task::TokioTask;
pub use thread_pool::ThreadPoolScheduler;
