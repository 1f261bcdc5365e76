//! Decorator combinators
//!
//! Explicit form of the rewriter for call sites that do not go through a
//! marker catalog: the key is passed directly with the method body.
//!
//! ```ignore
//! let invoices = with_scheduler_multi("ioScheduler", registry.clone(), || service.invoices());
//! ```

use std::sync::Arc;

use subon_domain::error::Error;
use subon_domain::ports::ComponentLookup;
use subon_domain::value_objects::{MultiValue, ReactiveShape, ReactiveValue, SchedulingMarker, SingleValue};

use crate::domain_services::binding::{DEFAULT_CHANNEL_CAPACITY, bind, bind_multi, bind_single};
use crate::use_cases::resolver::SchedulerResolver;
use crate::use_cases::rewriter::{failed_multi, failed_single, intercept};

const ANONYMOUS_METHOD: &str = "<with_scheduler>";

/// Run the single-value pipeline produced by `f` on the scheduler under `key`
///
/// `f` is not called when `key` is blank or does not resolve to a scheduler.
pub fn with_scheduler_single<T, E, F>(key: &str, registry: Arc<dyn ComponentLookup>, f: F) -> SingleValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
    F: FnOnce() -> SingleValue<T, E>,
{
    let marker = match SchedulingMarker::new(key) {
        Ok(marker) => marker,
        Err(err) => return failed_single(err),
    };
    let resolver = SchedulerResolver::new(registry);
    intercept(&resolver, ANONYMOUS_METHOD, marker.key(), failed_single, f, bind_single)
}

/// Run the multi-value pipeline produced by `f` on the scheduler under `key`
///
/// `f` is not called when `key` is blank or does not resolve to a scheduler.
pub fn with_scheduler_multi<T, E, F>(key: &str, registry: Arc<dyn ComponentLookup>, f: F) -> MultiValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
    F: FnOnce() -> MultiValue<T, E>,
{
    let marker = match SchedulingMarker::new(key) {
        Ok(marker) => marker,
        Err(err) => return failed_multi(err),
    };
    let resolver = SchedulerResolver::new(registry);
    intercept(
        &resolver,
        ANONYMOUS_METHOD,
        marker.key(),
        failed_multi,
        f,
        |value, scheduler| bind_multi(value, scheduler, DEFAULT_CHANNEL_CAPACITY),
    )
}

/// Run the value produced by `f` on the scheduler under `key`
///
/// `shape` is the shape `f` declares; a resolution failure is reported as a
/// failed value of that shape.
pub fn with_scheduler<T, E, F>(
    key: &str,
    shape: ReactiveShape,
    registry: Arc<dyn ComponentLookup>,
    f: F,
) -> ReactiveValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
    F: FnOnce() -> ReactiveValue<T, E>,
{
    let marker = match SchedulingMarker::new(key) {
        Ok(marker) => marker,
        Err(err) => return ReactiveValue::failed(shape, E::from(err)),
    };
    let resolver = SchedulerResolver::new(registry);
    intercept(
        &resolver,
        ANONYMOUS_METHOD,
        marker.key(),
        |err| ReactiveValue::failed(shape, E::from(err)),
        f,
        |value, scheduler| bind(value, scheduler, DEFAULT_CHANNEL_CAPACITY),
    )
}
