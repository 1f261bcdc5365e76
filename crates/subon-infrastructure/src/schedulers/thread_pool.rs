//! Thread-pool scheduler
//!
//! Owns a dedicated multi-thread tokio runtime. Worker threads are named
//! `<prefix>-<n>`, which is how work bound to this scheduler can be told
//! apart in logs and tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use subon_domain::error::{Error, Result};
use subon_domain::ports::{ScheduledTask, Scheduler, TaskHandle};
use tokio::runtime::{Builder, Handle, Runtime};
use tracing::{debug, info};

use super::task::TokioTask;
use crate::error_ext::ErrorContext;

/// Scheduler backed by its own tokio runtime
#[derive(Debug)]
pub struct ThreadPoolScheduler {
    name: String,
    thread_name: String,
    worker_threads: usize,
    handle: Handle,
    runtime: Option<Runtime>,
    closed: AtomicBool,
}

impl ThreadPoolScheduler {
    /// Start a runtime with `worker_threads` workers named after `name`
    pub fn new<S: Into<String>>(name: S, worker_threads: usize) -> Result<Self> {
        let name = name.into();
        let thread_name = name.clone();
        Self::with_thread_name(name, worker_threads, thread_name)
    }

    /// Start a runtime whose workers are named `<thread_name>-<n>`
    pub fn with_thread_name<N: Into<String>, T: Into<String>>(
        name: N,
        worker_threads: usize,
        thread_name: T,
    ) -> Result<Self> {
        let name = name.into();
        let thread_name = thread_name.into();
        if worker_threads == 0 {
            return Err(Error::configuration(format!(
                "Scheduler '{name}' must have at least one worker thread"
            )));
        }

        let prefix = thread_name.clone();
        let next_id = AtomicUsize::new(1);
        let runtime = Builder::new_multi_thread()
            .worker_threads(worker_threads)
            .thread_name_fn(move || format!("{prefix}-{}", next_id.fetch_add(1, Ordering::Relaxed)))
            .enable_all()
            .build()
            .with_context(|| format!("Failed to start runtime for scheduler '{name}'"))?;

        info!(scheduler = %name, worker_threads, thread_name = %thread_name, "Thread-pool scheduler started");
        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
            name,
            thread_name,
            worker_threads,
            closed: AtomicBool::new(false),
        })
    }

    /// Number of worker threads
    pub fn worker_threads(&self) -> usize {
        self.worker_threads
    }

    /// Prefix of the worker thread names
    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }

    /// Stop accepting tasks
    ///
    /// Tasks already running keep going until the scheduler is dropped.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!(scheduler = %self.name, "Thread-pool scheduler closed");
        }
    }

    /// Whether [`close`](Self::close) was called
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

impl Scheduler for ThreadPoolScheduler {
    fn name(&self) -> &str {
        &self.name
    }

    fn schedule(&self, task: ScheduledTask) -> Result<Box<dyn TaskHandle>> {
        if self.is_closed() {
            return Err(Error::scheduler_rejected(&self.name, "scheduler is closed"));
        }
        Ok(Box::new(TokioTask::new(self.handle.spawn(task))))
    }
}

impl Drop for ThreadPoolScheduler {
    fn drop(&mut self) {
        // Dropping a runtime blocks, which panics inside async contexts
        if let Some(runtime) = self.runtime.take() {
            runtime.shutdown_background();
            debug!(scheduler = %self.name, "Thread-pool scheduler shut down");
        }
    }
}
