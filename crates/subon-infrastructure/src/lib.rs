//! # Infrastructure Layer
//!
//! Concrete schedulers and the technical plumbing around the scheduling
//! engine.
//!
//! ## Module Categories
//!
//! ### Scheduling
//! | Module | Description |
//! |--------|-------------|
//! | [`schedulers`] | Thread-pool and runtime-handle schedulers |
//! | [`di`] | Component registry and bootstrap |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod schedulers;

// Re-export commonly used types
pub use di::{ComponentRegistry, SchedulingContext};
pub use error_ext::ErrorContext;
