//! Value Objects

pub mod marker;
pub mod reactive;

pub use marker::{MarkedMethod, MethodId, SchedulingMarker};
pub use reactive::{MultiValue, ReactiveShape, ReactiveValue, SingleValue};
