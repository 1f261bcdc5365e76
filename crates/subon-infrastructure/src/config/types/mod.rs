//! Configuration types module

pub mod app;
pub mod logging;
pub mod scheduler;

// Re-export main types
pub use app::*;
pub use logging::LoggingConfig;
pub use scheduler::{MarkerConfig, RewriterConfig, SchedulerConfig, SchedulerKind};
