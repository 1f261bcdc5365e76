//! Configuration management
//!
//! Figment-based loading of the scheduler table, configured markers,
//! rewriter tuning and logging.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::*;
