//! Scheduler Factory
//!
//! Creates schedulers from their configuration entries.

use std::sync::Arc;

use subon_domain::error::Result;
use subon_domain::ports::Scheduler;

use super::handle::HandleScheduler;
use super::thread_pool::ThreadPoolScheduler;
use crate::config::{SchedulerConfig, SchedulerKind};
use crate::constants::DEFAULT_WORKER_THREADS;

/// Factory for creating schedulers
pub struct SchedulerFactory;

impl SchedulerFactory {
    /// Create the scheduler registered under `name`
    ///
    /// `current` schedulers must be created from inside a tokio runtime.
    pub fn create(name: &str, config: &SchedulerConfig) -> Result<Arc<dyn Scheduler>> {
        match config.kind {
            SchedulerKind::ThreadPool => {
                let workers = config.worker_threads.unwrap_or(DEFAULT_WORKER_THREADS);
                let thread_name = config.thread_name.as_deref().unwrap_or(name);
                Ok(Arc::new(ThreadPoolScheduler::with_thread_name(name, workers, thread_name)?))
            }
            SchedulerKind::Current => Ok(Arc::new(HandleScheduler::current(name)?)),
        }
    }
}
