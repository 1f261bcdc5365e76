//! Invocation Rewriter
//!
//! Intercepts calls to marked methods and returns their reactive value bound
//! to the scheduler named by the marker.
//!
//! ## Per-invocation state machine
//!
//! ```text
//! Intercepted → Resolving ─┬─► ResolvedOk → Invoking → Wrapping → Returned
//!                          └─► ResolutionFailed → ReturnedError
//! ```
//!
//! On `ResolutionFailed` the method body is never called; the caller gets a
//! failed value of the declared shape instead. Nothing survives the call.

use std::fmt;
use std::sync::Arc;

use futures::{FutureExt, StreamExt, future, stream};
use subon_domain::error::Error;
use subon_domain::ports::Scheduler;
use subon_domain::value_objects::{MethodId, MultiValue, ReactiveValue, SingleValue};
use tracing::{trace, warn};

use crate::domain_services::binding::{DEFAULT_CHANNEL_CAPACITY, bind, bind_multi, bind_single};
use crate::domain_services::catalog::MarkerCatalog;
use crate::use_cases::resolver::SchedulerResolver;

/// Phase of one intercepted invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationPhase {
    /// The call reached the rewriter
    Intercepted,
    /// The marker key is being looked up
    Resolving,
    /// A scheduler was found
    ResolvedOk,
    /// The key was missing or named a non-scheduler
    ResolutionFailed,
    /// The original method is running
    Invoking,
    /// The raw value is being bound to the scheduler
    Wrapping,
    /// The scheduled value was handed back
    Returned,
    /// A failed value was handed back
    ReturnedError,
}

impl InvocationPhase {
    /// Snake-case name used in trace events
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intercepted => "intercepted",
            Self::Resolving => "resolving",
            Self::ResolvedOk => "resolved_ok",
            Self::ResolutionFailed => "resolution_failed",
            Self::Invoking => "invoking",
            Self::Wrapping => "wrapping",
            Self::Returned => "returned",
            Self::ReturnedError => "returned_error",
        }
    }
}

fn enter(method: &str, phase: InvocationPhase) {
    trace!(method, phase = phase.as_str(), "invocation.phase");
}

/// Resolve `key`, then either bind the method's value or fail without
/// calling the method
pub(crate) fn intercept<V>(
    resolver: &SchedulerResolver,
    method: &str,
    key: &str,
    fail: impl FnOnce(Error) -> V,
    invoke: impl FnOnce() -> V,
    bind_to: impl FnOnce(V, Arc<dyn Scheduler>) -> V,
) -> V {
    enter(method, InvocationPhase::Intercepted);
    enter(method, InvocationPhase::Resolving);
    match resolver.resolve_key(key) {
        Ok(scheduler) => {
            enter(method, InvocationPhase::ResolvedOk);
            enter(method, InvocationPhase::Invoking);
            let raw = invoke();
            enter(method, InvocationPhase::Wrapping);
            let scheduled = bind_to(raw, scheduler);
            enter(method, InvocationPhase::Returned);
            scheduled
        }
        Err(err) => {
            enter(method, InvocationPhase::ResolutionFailed);
            warn!(method, key, error = %err, "Scheduler resolution failed, method not invoked");
            enter(method, InvocationPhase::ReturnedError);
            fail(err)
        }
    }
}

pub(crate) fn failed_single<T, E>(err: Error) -> SingleValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    future::ready(Err(E::from(err))).boxed()
}

pub(crate) fn failed_multi<T, E>(err: Error) -> MultiValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    stream::once(future::ready(Err(E::from(err)))).boxed()
}

/// A marker whose key does not resolve to a scheduler
#[derive(Debug)]
pub struct MarkerViolation {
    /// Marked method
    pub method: MethodId,
    /// Key the marker names
    pub key: String,
    /// Resolution failure
    pub error: Error,
}

impl fmt::Display for MarkerViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}: {}", self.method, self.key, self.error)
    }
}

/// Rewrites the reactive values returned by marked methods
///
/// # Example
///
/// ```ignore
/// let rewriter = InvocationRewriter::new(resolver, Arc::new(catalog));
///
/// let invoices = rewriter.multi("InvoiceService::invoices", || service.invoices());
/// ```
#[derive(Debug, Clone)]
pub struct InvocationRewriter {
    resolver: SchedulerResolver,
    catalog: Arc<MarkerCatalog>,
    channel_capacity: usize,
}

impl InvocationRewriter {
    /// Create a rewriter for the methods in `catalog`
    pub fn new(resolver: SchedulerResolver, catalog: Arc<MarkerCatalog>) -> Self {
        Self {
            resolver,
            catalog,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        }
    }

    /// Set the buffer between multi-value tasks and their consumers
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }

    /// The marker catalog
    pub fn catalog(&self) -> &MarkerCatalog {
        &self.catalog
    }

    /// The scheduler resolver
    pub fn resolver(&self) -> &SchedulerResolver {
        &self.resolver
    }

    /// Buffer between multi-value tasks and their consumers
    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }

    /// Invoke `f` as the body of `method`, whatever shape it returns
    ///
    /// Unmarked methods pass through untouched. For marked methods a
    /// resolution failure yields a failed value of the shape declared in the
    /// catalog; otherwise the returned variant is bound to the scheduler.
    pub fn invoke<T, E, F>(&self, method: &str, f: F) -> ReactiveValue<T, E>
    where
        T: Send + 'static,
        E: From<Error> + Send + 'static,
        F: FnOnce() -> ReactiveValue<T, E>,
    {
        let Some(marked) = self.catalog.get(method) else {
            trace!(method, "invocation.pass_through");
            return f();
        };
        let shape = marked.shape;
        let capacity = self.channel_capacity;
        intercept(
            &self.resolver,
            method,
            marked.marker.key(),
            |err| ReactiveValue::failed(shape, E::from(err)),
            f,
            |value, scheduler| bind(value, scheduler, capacity),
        )
    }

    /// Invoke `f` as the body of a method returning a single-value pipeline
    pub fn single<T, E, F>(&self, method: &str, f: F) -> SingleValue<T, E>
    where
        T: Send + 'static,
        E: From<Error> + Send + 'static,
        F: FnOnce() -> SingleValue<T, E>,
    {
        let Some(marker) = self.catalog.marker(method) else {
            trace!(method, "invocation.pass_through");
            return f();
        };
        intercept(&self.resolver, method, marker.key(), failed_single, f, bind_single)
    }

    /// Invoke `f` as the body of a method returning a multi-value pipeline
    pub fn multi<T, E, F>(&self, method: &str, f: F) -> MultiValue<T, E>
    where
        T: Send + 'static,
        E: From<Error> + Send + 'static,
        F: FnOnce() -> MultiValue<T, E>,
    {
        let Some(marker) = self.catalog.marker(method) else {
            trace!(method, "invocation.pass_through");
            return f();
        };
        let capacity = self.channel_capacity;
        intercept(
            &self.resolver,
            method,
            marker.key(),
            failed_multi,
            f,
            |value, scheduler| bind_multi(value, scheduler, capacity),
        )
    }

    /// Resolve every marker in the catalog and report the ones that fail
    ///
    /// Run at startup to reject misconfiguration before any call is made.
    pub fn validate(&self) -> Vec<MarkerViolation> {
        self.catalog
            .methods()
            .into_iter()
            .filter_map(|marked| {
                self.resolver
                    .resolve(&marked.marker)
                    .err()
                    .map(|error| MarkerViolation {
                        method: marked.method.clone(),
                        key: marked.marker.key().to_owned(),
                        error,
                    })
            })
            .collect()
    }
}
