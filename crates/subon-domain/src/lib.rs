//! Domain Layer - subon
//!
//! Core types for binding reactive values to named schedulers.
//!
//! ## Contents
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`ports`] | `Scheduler` and `ComponentLookup` contracts |
//! | [`value_objects`] | Scheduling markers, method identities, reactive shapes |
//!
//! ## Dependencies
//!
//! This crate depends only on pure libraries (`futures`, `serde`, `thiserror`).
//! Concrete schedulers and registries live in `subon-infrastructure`.

pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use ports::*;
pub use value_objects::*;
