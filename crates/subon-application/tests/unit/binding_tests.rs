//! Tests for the scheduler binding operators
//!
//! Emission context is observed through the task-local scope of
//! `TaskLocalScheduler`.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use futures::{FutureExt, StreamExt, stream};
use subon_application::domain_services::binding::{bind, bind_multi, bind_single};
use subon_domain::error::Error;
use subon_domain::ports::Scheduler;
use subon_domain::value_objects::{MultiValue, ReactiveShape, ReactiveValue, SingleValue};

use crate::test_utils::{DropFlag, ServiceError, TaskLocalScheduler, current_scheduler, wait_for};

fn shared(scheduler: &Arc<TaskLocalScheduler>) -> Arc<dyn Scheduler> {
    scheduler.clone()
}

#[tokio::test]
async fn test_single_runs_on_scheduler() {
    let io = TaskLocalScheduler::new("io");
    let value: SingleValue<Option<String>, Error> = async { Ok(current_scheduler()) }.boxed();

    let observed = bind_single(value, shared(&io)).await.unwrap();
    assert_eq!(observed.as_deref(), Some("io"));
    assert_eq!(current_scheduler(), None);
}

#[tokio::test]
async fn test_multi_emits_on_scheduler() {
    let io = TaskLocalScheduler::new("io");
    let value: MultiValue<(u32, Option<String>), Error> =
        stream::iter(1..=3).map(|n| Ok((n, current_scheduler()))).boxed();

    let items: Vec<_> = bind_multi(value, shared(&io), 2)
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(items.iter().all(|(_, scheduler)| scheduler.as_deref() == Some("io")));
}

#[tokio::test]
async fn test_binding_is_lazy() {
    let io = TaskLocalScheduler::new("io");
    let single = bind_single::<u32, Error>(async { Ok(1) }.boxed(), shared(&io));
    let multi = bind_multi::<u32, Error>(stream::iter(vec![Ok(1)]).boxed(), shared(&io), 4);
    assert_eq!(io.scheduled(), 0);

    single.await.unwrap();
    assert_eq!(io.scheduled(), 1);

    let _ = multi.collect::<Vec<_>>().await;
    assert_eq!(io.scheduled(), 2);
}

#[tokio::test]
async fn test_method_errors_pass_through_unchanged() {
    let io = TaskLocalScheduler::new("io");

    let single: SingleValue<u32, ServiceError> =
        async { Err(ServiceError::Business("declined".into())) }.boxed();
    match bind_single(single, shared(&io)).await {
        Err(ServiceError::Business(message)) => assert_eq!(message, "declined"),
        other => panic!("unexpected {other:?}"),
    }

    let multi: MultiValue<u32, ServiceError> = stream::iter(vec![
        Ok(1),
        Err(ServiceError::Business("bad row".into())),
        Ok(3),
    ])
    .boxed();
    let items: Vec<_> = bind_multi(multi, shared(&io), 4).collect().await;
    assert_eq!(items.len(), 3);
    assert!(matches!(items[0], Ok(1)));
    assert!(matches!(&items[1], Err(ServiceError::Business(m)) if m == "bad row"));
    assert!(matches!(items[2], Ok(3)));
}

#[tokio::test]
async fn test_rejected_task_fails_the_value() {
    let io = TaskLocalScheduler::new("io");
    io.close();

    let single = bind_single::<u32, Error>(async { Ok(1) }.boxed(), shared(&io));
    assert!(matches!(single.await, Err(Error::SchedulerRejected { .. })));

    let multi = bind_multi::<u32, Error>(stream::iter(vec![Ok(1)]).boxed(), shared(&io), 4);
    let items: Vec<_> = multi.collect().await;
    assert_eq!(items.len(), 1);
    assert!(matches!(items[0], Err(Error::SchedulerRejected { .. })));
}

#[tokio::test]
async fn test_panicking_single_reports_task_failure() {
    let io = TaskLocalScheduler::new("io");
    let value: SingleValue<u32, Error> = async { panic!("boom") }.boxed();

    let result = bind_single(value, shared(&io)).await;
    assert!(matches!(result, Err(Error::TaskFailed { ref scheduler, .. }) if scheduler == "io"));
}

#[tokio::test]
async fn test_panicking_multi_reports_task_failure_after_items() {
    let io = TaskLocalScheduler::new("io");
    let value: MultiValue<u32, Error> = stream::iter(vec![1, 2])
        .map(|n| {
            assert!(n < 2, "boom");
            Ok(n)
        })
        .boxed();

    let items: Vec<_> = bind_multi(value, shared(&io), 4).collect().await;
    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Ok(1)));
    assert!(matches!(items[1], Err(Error::TaskFailed { .. })));
}

#[tokio::test]
async fn test_dropping_multi_cancels_the_original() {
    let io = TaskLocalScheduler::new("io");
    let dropped = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(dropped.clone());
    let value: MultiValue<u32, Error> = stream::repeat_with(move || {
        let _keep = &guard;
        Ok(1)
    })
    .boxed();

    let mut scheduled = bind_multi(value, shared(&io), 1);
    assert!(matches!(scheduled.next().await, Some(Ok(1))));
    assert!(!dropped.load(Ordering::SeqCst));

    drop(scheduled);
    assert!(wait_for(&dropped).await, "original stream should be dropped");
}

#[tokio::test]
async fn test_dropping_single_cancels_the_original() {
    let io = TaskLocalScheduler::new("io");
    let dropped = Arc::new(AtomicBool::new(false));
    let guard = DropFlag(dropped.clone());
    let value: SingleValue<u32, Error> = async move {
        let _guard = guard;
        futures::future::pending::<()>().await;
        Ok(1)
    }
    .boxed();

    let mut scheduled = bind_single(value, shared(&io));
    // Poll once so that the task is handed to the scheduler
    assert!(futures::poll!(&mut scheduled).is_pending());
    assert_eq!(io.scheduled(), 1);

    drop(scheduled);
    assert!(wait_for(&dropped).await, "original future should be dropped");
}

#[tokio::test]
async fn test_bind_dispatches_on_variant() {
    let io = TaskLocalScheduler::new("io");

    let single: ReactiveValue<Option<String>, Error> = ReactiveValue::single(async { Ok(current_scheduler()) });
    let bound = bind(single, shared(&io), 4);
    assert_eq!(bound.shape(), ReactiveShape::Single);
    assert_eq!(bound.into_single().unwrap().await.unwrap().as_deref(), Some("io"));

    let multi: ReactiveValue<Option<String>, Error> =
        ReactiveValue::multi(stream::once(async { Ok(current_scheduler()) }));
    let bound = bind(multi, shared(&io), 4);
    assert_eq!(bound.shape(), ReactiveShape::Multi);
    let items: Vec<_> = bound.into_multi().unwrap().collect().await;
    assert!(matches!(&items[..], [Ok(Some(name))] if name == "io"));
}
