//! Scheduler binding operators
//!
//! Both operators are lazy: nothing reaches the scheduler until the returned
//! value is first polled. From then on the original value is driven by a task
//! on the scheduler, so every emission is computed there.
//!
//! Dropping the returned value aborts that task, which drops the original
//! value in turn.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

use futures::channel::{mpsc, oneshot};
use futures::stream::{self, Stream};
use futures::{FutureExt, SinkExt, StreamExt, future};
use subon_domain::error::Error;
use subon_domain::ports::{Scheduler, TaskHandle};
use subon_domain::value_objects::{MultiValue, ReactiveValue, SingleValue};
use tracing::trace;

/// Items buffered between a multi-value task and its consumer
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

struct AbortOnDrop(Box<dyn TaskHandle>);

impl Drop for AbortOnDrop {
    fn drop(&mut self) {
        if !self.0.is_finished() {
            self.0.abort();
        }
    }
}

/// Bind a value of either shape, dispatching on the variant
pub fn bind<T, E>(value: ReactiveValue<T, E>, scheduler: Arc<dyn Scheduler>, capacity: usize) -> ReactiveValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    match value {
        ReactiveValue::Single(single) => ReactiveValue::Single(bind_single(single, scheduler)),
        ReactiveValue::Multi(multi) => ReactiveValue::Multi(bind_multi(multi, scheduler, capacity)),
    }
}

/// Run a single-value pipeline on `scheduler`
///
/// The result, success or error, is delivered unchanged. If the scheduler
/// rejects the task the pipeline fails with [`Error::SchedulerRejected`]; if
/// the task dies before producing a result it fails with
/// [`Error::TaskFailed`].
pub fn bind_single<T, E>(value: SingleValue<T, E>, scheduler: Arc<dyn Scheduler>) -> SingleValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    async move {
        let (result_tx, result_rx) = oneshot::channel();
        let task = async move {
            let _ = result_tx.send(value.await);
        }
        .boxed();

        trace!(scheduler = scheduler.name(), shape = "single", "bind.subscribe");
        let handle = match scheduler.schedule(task) {
            Ok(handle) => handle,
            Err(err) => return Err(E::from(err)),
        };
        let _guard = AbortOnDrop(handle);

        match result_rx.await {
            Ok(result) => result,
            Err(oneshot::Canceled) => Err(E::from(Error::task_failed(
                scheduler.name(),
                "task ended before producing a value",
            ))),
        }
    }
    .boxed()
}

/// Run a multi-value pipeline on `scheduler`
///
/// Items travel through a bounded channel of `capacity` slots, so a slow
/// consumer holds the scheduled task back. Item errors are forwarded
/// unchanged and do not end the stream; the original stream decides that.
pub fn bind_multi<T, E>(value: MultiValue<T, E>, scheduler: Arc<dyn Scheduler>, capacity: usize) -> MultiValue<T, E>
where
    T: Send + 'static,
    E: From<Error> + Send + 'static,
{
    let subscribe = async move {
        // One slot is reserved per sender
        let (mut items_tx, items_rx) = mpsc::channel(capacity.max(1) - 1);
        let (done_tx, done_rx) = oneshot::channel::<()>();
        let mut value = value;
        let task = async move {
            while let Some(item) = value.next().await {
                if items_tx.send(item).await.is_err() {
                    return;
                }
            }
            let _ = done_tx.send(());
        }
        .boxed();

        trace!(scheduler = scheduler.name(), shape = "multi", capacity, "bind.subscribe");
        match scheduler.schedule(task) {
            Ok(handle) => ScheduledStream {
                scheduler: scheduler.name().to_owned(),
                items: items_rx,
                done: Some(done_rx),
                _guard: AbortOnDrop(handle),
            }
            .boxed(),
            Err(err) => stream::once(future::ready(Err(E::from(err)))).boxed(),
        }
    };

    stream::once(subscribe).flatten().boxed()
}

/// Consumer side of a multi-value pipeline running on a scheduler
struct ScheduledStream<T, E> {
    scheduler: String,
    items: mpsc::Receiver<Result<T, E>>,
    // Resolved once the task drained the original stream; dropped on panic or abort
    done: Option<oneshot::Receiver<()>>,
    _guard: AbortOnDrop,
}

impl<T, E> Unpin for ScheduledStream<T, E> {}

impl<T, E> Stream for ScheduledStream<T, E>
where
    E: From<Error>,
{
    type Item = Result<T, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        if let Some(item) = ready!(this.items.poll_next_unpin(cx)) {
            return Poll::Ready(Some(item));
        }

        let Some(done) = this.done.as_mut() else {
            return Poll::Ready(None);
        };
        let outcome = ready!(done.poll_unpin(cx));
        this.done = None;

        match outcome {
            Ok(()) => Poll::Ready(None),
            Err(oneshot::Canceled) => Poll::Ready(Some(Err(E::from(Error::task_failed(
                this.scheduler.as_str(),
                "task ended before the stream completed",
            ))))),
        }
    }
}
