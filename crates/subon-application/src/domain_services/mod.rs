//! Domain services
//!
//! - [`binding`]: the "subscribe on scheduler" operators for both reactive shapes
//! - [`catalog`]: the immutable method → marker map built at startup

pub mod binding;
pub mod catalog;

pub use binding::{DEFAULT_CHANNEL_CAPACITY, bind, bind_multi, bind_single};
pub use catalog::{MarkerCatalog, MarkerCatalogBuilder};
