//! Task handle over a tokio `JoinHandle`

use subon_domain::ports::TaskHandle;
use tokio::task::JoinHandle;

/// Handle to a task spawned on a tokio runtime
#[derive(Debug)]
pub struct TokioTask(JoinHandle<()>);

impl TokioTask {
    /// Wrap a join handle
    pub fn new(handle: JoinHandle<()>) -> Self {
        Self(handle)
    }
}

impl TaskHandle for TokioTask {
    fn abort(&self) {
        self.0.abort();
    }

    fn is_finished(&self) -> bool {
        self.0.is_finished()
    }
}
