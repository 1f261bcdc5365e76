//! Tests for the invocation rewriter
//!
//! The method bodies below count their invocations so that the tests can
//! check that a failed resolution never runs business logic.

use std::sync::Arc;

use futures::{FutureExt, StreamExt, stream};
use subon_application::domain_services::catalog::MarkerCatalog;
use subon_application::use_cases::resolver::SchedulerResolver;
use subon_application::use_cases::rewriter::InvocationRewriter;
use subon_domain::error::Error;
use subon_domain::ports::ComponentEntry;
use subon_domain::value_objects::{MultiValue, ReactiveShape, ReactiveValue, SingleValue};

use crate::test_utils::{CallCounter, ServiceError, TaskLocalScheduler, current_scheduler, registry, scheduler_entry};

struct Fixture {
    rewriter: InvocationRewriter,
    io: Arc<TaskLocalScheduler>,
    calls: CallCounter,
}

fn fixture() -> Fixture {
    let io = TaskLocalScheduler::new("ioScheduler");
    let registry = registry(vec![
        ("ioScheduler", scheduler_entry(&io)),
        ("notAScheduler", ComponentEntry::new(String::from("a plain string"))),
    ]);
    let catalog = MarkerCatalog::builder()
        .mark("NumberService::numbers", "ioScheduler", ReactiveShape::Multi)
        .unwrap()
        .mark("NumberService::answer", "ioScheduler", ReactiveShape::Single)
        .unwrap()
        .mark("NumberService::lost", "missing", ReactiveShape::Multi)
        .unwrap()
        .mark("NumberService::lost_answer", "missing", ReactiveShape::Single)
        .unwrap()
        .mark("NumberService::mistyped", "notAScheduler", ReactiveShape::Multi)
        .unwrap()
        .build();
    Fixture {
        rewriter: InvocationRewriter::new(SchedulerResolver::new(registry), Arc::new(catalog)),
        io,
        calls: CallCounter::default(),
    }
}

/// Multi-value body emitting 1, 2, 3 tagged with the polling scheduler
fn numbers(calls: &CallCounter) -> MultiValue<(u32, Option<String>), Error> {
    calls.hit();
    stream::iter(1..=3).map(|n| Ok((n, current_scheduler()))).boxed()
}

fn answer(calls: &CallCounter) -> SingleValue<(u32, Option<String>), Error> {
    calls.hit();
    async { Ok((42, current_scheduler())) }.boxed()
}

#[tokio::test]
async fn test_marked_multi_emits_on_resolved_scheduler() {
    let fx = fixture();

    let items: Vec<_> = fx
        .rewriter
        .multi("NumberService::numbers", || numbers(&fx.calls))
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert!(items.iter().all(|(_, on)| on.as_deref() == Some("ioScheduler")));
    assert_eq!(fx.calls.count(), 1);
    assert_eq!(fx.io.scheduled(), 1);
}

#[tokio::test]
async fn test_marked_single_runs_on_resolved_scheduler() {
    let fx = fixture();

    let (value, on) = fx
        .rewriter
        .single("NumberService::answer", || answer(&fx.calls))
        .await
        .unwrap();

    assert_eq!(value, 42);
    assert_eq!(on.as_deref(), Some("ioScheduler"));
    assert_eq!(fx.calls.count(), 1);
}

#[tokio::test]
async fn test_missing_scheduler_fails_without_invoking() {
    let fx = fixture();

    let items: Vec<_> = fx
        .rewriter
        .multi("NumberService::lost", || numbers(&fx.calls))
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    assert!(matches!(&items[0], Err(Error::SchedulerNotFound { key }) if key == "missing"));
    assert_eq!(fx.calls.count(), 0);
    assert_eq!(fx.io.scheduled(), 0);

    let single = fx
        .rewriter
        .single("NumberService::lost_answer", || answer(&fx.calls))
        .await;
    assert!(matches!(single, Err(Error::SchedulerNotFound { .. })));
    assert_eq!(fx.calls.count(), 0);
}

#[tokio::test]
async fn test_wrong_type_fails_without_invoking() {
    let fx = fixture();

    let items: Vec<_> = fx
        .rewriter
        .multi("NumberService::mistyped", || numbers(&fx.calls))
        .collect()
        .await;

    assert_eq!(items.len(), 1);
    match &items[0] {
        Err(Error::SchedulerTypeMismatch { key, actual_type }) => {
            assert_eq!(key, "notAScheduler");
            assert!(actual_type.contains("String"));
        }
        other => panic!("expected type mismatch, got {other:?}"),
    }
    assert_eq!(fx.calls.count(), 0);
}

#[tokio::test]
async fn test_unmarked_method_passes_through() {
    let fx = fixture();

    let items: Vec<_> = fx
        .rewriter
        .multi("NumberService::unmarked", || numbers(&fx.calls))
        .map(|item| item.unwrap())
        .collect()
        .await;

    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|(_, on)| on.is_none()));
    assert_eq!(fx.calls.count(), 1);
    assert_eq!(fx.io.scheduled(), 0);
}

#[tokio::test]
async fn test_invoke_binds_the_returned_variant() {
    let fx = fixture();

    let value = fx
        .rewriter
        .invoke("NumberService::answer", || ReactiveValue::Single(answer(&fx.calls)));
    assert_eq!(value.shape(), ReactiveShape::Single);
    let (_, on) = value.into_single().unwrap().await.unwrap();
    assert_eq!(on.as_deref(), Some("ioScheduler"));

    let value = fx
        .rewriter
        .invoke("NumberService::numbers", || ReactiveValue::Multi(numbers(&fx.calls)));
    let items: Vec<_> = value.into_multi().unwrap().collect().await;
    assert_eq!(items.len(), 3);
    assert_eq!(fx.calls.count(), 2);
}

#[tokio::test]
async fn test_invoke_failure_uses_declared_shape() {
    let fx = fixture();

    let value = fx
        .rewriter
        .invoke("NumberService::lost_answer", || ReactiveValue::Single(answer(&fx.calls)));
    assert_eq!(value.shape(), ReactiveShape::Single);
    assert!(matches!(value.into_single().unwrap().await, Err(Error::SchedulerNotFound { .. })));

    let value = fx
        .rewriter
        .invoke("NumberService::lost", || ReactiveValue::Multi(numbers(&fx.calls)));
    assert_eq!(value.shape(), ReactiveShape::Multi);
    assert_eq!(fx.calls.count(), 0);
}

#[tokio::test]
async fn test_business_errors_are_not_masked() {
    let fx = fixture();

    let result = fx
        .rewriter
        .single::<u32, ServiceError, _>("NumberService::answer", || {
            async { Err(ServiceError::Business("out of stock".into())) }.boxed()
        })
        .await;
    assert!(matches!(result, Err(ServiceError::Business(ref m)) if m == "out of stock"));

    let result = fx
        .rewriter
        .single::<u32, ServiceError, _>("NumberService::lost_answer", || async { Ok(1) }.boxed())
        .await;
    assert!(matches!(
        result,
        Err(ServiceError::Scheduling(Error::SchedulerNotFound { .. }))
    ));
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    let fx = fixture();

    let runs = (0..8).map(|_| {
        fx.rewriter
            .multi("NumberService::numbers", || numbers(&fx.calls))
            .collect::<Vec<_>>()
    });
    let results = futures::future::join_all(runs).await;

    assert!(results.iter().all(|items| items.len() == 3));
    assert_eq!(fx.calls.count(), 8);
    assert_eq!(fx.io.scheduled(), 8);
}

#[test]
fn test_validate_reports_unresolvable_markers() {
    let fx = fixture();

    let violations = fx.rewriter.validate();
    let methods: Vec<_> = violations.iter().map(|v| v.method.as_str()).collect();
    assert_eq!(
        methods,
        vec![
            "NumberService::lost",
            "NumberService::lost_answer",
            "NumberService::mistyped"
        ]
    );
    assert!(violations[2].to_string().contains("notAScheduler"));
}
