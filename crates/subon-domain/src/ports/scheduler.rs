//! Scheduler port

use std::fmt;

use futures::future::BoxFuture;

use crate::error::Result;

/// Unit of work handed to a scheduler
pub type ScheduledTask = BoxFuture<'static, ()>;

/// Execution context (thread pool, event loop) on which reactive values run
///
/// Implementations must be object safe; the registry stores them as
/// `Arc<dyn Scheduler>`.
///
/// # Example
///
/// ```ignore
/// let handle = scheduler.schedule(Box::pin(async { do_work().await }))?;
/// handle.abort();
/// ```
pub trait Scheduler: Send + Sync + fmt::Debug {
    /// Name used in logs and error messages
    fn name(&self) -> &str;

    /// Start driving `task` on this scheduler
    ///
    /// Returns [`crate::Error::SchedulerRejected`] when the scheduler can no
    /// longer accept work.
    fn schedule(&self, task: ScheduledTask) -> Result<Box<dyn TaskHandle>>;
}

/// Handle to a task accepted by a [`Scheduler`]
pub trait TaskHandle: Send + Sync {
    /// Request cancellation of the task
    fn abort(&self);

    /// Whether the task has run to completion or was cancelled
    fn is_finished(&self) -> bool;
}
