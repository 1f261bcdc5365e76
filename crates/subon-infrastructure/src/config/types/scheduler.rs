//! Scheduler, marker and rewriter configuration types

use serde::{Deserialize, Serialize};
use subon_domain::value_objects::ReactiveShape;

use crate::constants::DEFAULT_CHANNEL_CAPACITY;

/// Kind of execution context backing a configured scheduler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchedulerKind {
    /// Dedicated multi-thread runtime owned by the scheduler
    #[default]
    ThreadPool,
    /// The tokio runtime the application is bootstrapped on
    Current,
}

impl SchedulerKind {
    /// Configuration name of the kind
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreadPool => "thread_pool",
            Self::Current => "current",
        }
    }
}

/// One entry of the `[schedulers]` table
///
/// ```toml
/// [schedulers.ioScheduler]
/// kind = "thread_pool"
/// worker_threads = 8
/// thread_name = "io"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Backing execution context
    pub kind: SchedulerKind,
    /// Worker threads for `thread_pool` schedulers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>,
    /// Worker thread name prefix, defaults to the registry key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_name: Option<String>,
}

impl SchedulerConfig {
    /// A thread-pool scheduler with `worker_threads` workers
    pub fn thread_pool(worker_threads: usize) -> Self {
        Self {
            kind: SchedulerKind::ThreadPool,
            worker_threads: Some(worker_threads),
            thread_name: None,
        }
    }

    /// A scheduler on the bootstrapping runtime
    pub fn current() -> Self {
        Self {
            kind: SchedulerKind::Current,
            ..Self::default()
        }
    }
}

/// Marker attached to a method from configuration, keyed by method identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Registry key of the scheduler
    pub key: String,
    /// Shape the method returns
    #[serde(default)]
    pub shape: ReactiveShape,
}

/// Invocation rewriter tuning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// Buffer between multi-value tasks and their consumers
    pub channel_capacity: usize,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }
}
