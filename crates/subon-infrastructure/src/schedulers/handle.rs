//! Scheduler over an existing tokio runtime

use subon_domain::error::{Error, Result};
use subon_domain::ports::{ScheduledTask, Scheduler, TaskHandle};
use tokio::runtime::Handle;

use super::task::TokioTask;

/// Scheduler spawning onto a runtime it does not own
#[derive(Debug, Clone)]
pub struct HandleScheduler {
    name: String,
    handle: Handle,
}

impl HandleScheduler {
    /// Schedule onto the runtime behind `handle`
    pub fn new<S: Into<String>>(name: S, handle: Handle) -> Self {
        Self {
            name: name.into(),
            handle,
        }
    }

    /// Schedule onto the runtime the caller is running on
    ///
    /// Fails outside of a tokio runtime.
    pub fn current<S: Into<String>>(name: S) -> Result<Self> {
        let name = name.into();
        let handle = Handle::try_current().map_err(|err| {
            Error::configuration_with_source(format!("Scheduler '{name}' requires a running tokio runtime"), err)
        })?;
        Ok(Self { name, handle })
    }
}

impl Scheduler for HandleScheduler {
    fn name(&self) -> &str {
        &self.name
    }

    fn schedule(&self, task: ScheduledTask) -> Result<Box<dyn TaskHandle>> {
        Ok(Box::new(TokioTask::new(self.handle.spawn(task))))
    }
}
