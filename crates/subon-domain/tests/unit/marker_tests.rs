//! Tests for scheduling markers and method identities

use subon_domain::error::Error;
use subon_domain::value_objects::{MarkedMethod, MethodId, ReactiveShape, SchedulingMarker};

#[test]
fn test_marker_keeps_key() {
    let marker = SchedulingMarker::new("ioScheduler").unwrap();
    assert_eq!(marker.key(), "ioScheduler");
    assert_eq!(marker.to_string(), "@subscribe_on(ioScheduler)");
}

#[test]
fn test_marker_rejects_blank_key() {
    for key in ["", "   "] {
        let err = SchedulingMarker::new(key).unwrap_err();
        assert!(matches!(err, Error::InvalidMarker { .. }), "key {key:?}");
    }
}

#[test]
fn test_method_id_rejects_blank_name() {
    assert!(MethodId::new("").is_err());
    assert_eq!(MethodId::new("InvoiceService::invoices").unwrap().as_str(), "InvoiceService::invoices");
}

#[test]
fn test_marked_method_validates_both_parts() {
    let marked = MarkedMethod::new("InvoiceService::invoices", "customScheduler", ReactiveShape::Multi).unwrap();
    assert_eq!(marked.method.as_str(), "InvoiceService::invoices");
    assert_eq!(marked.marker.key(), "customScheduler");
    assert_eq!(marked.shape, ReactiveShape::Multi);

    assert!(MarkedMethod::new("InvoiceService::invoices", "", ReactiveShape::Single).is_err());
    assert!(MarkedMethod::new("", "customScheduler", ReactiveShape::Single).is_err());
}

#[test]
fn test_reactive_shape_names() {
    assert_eq!(ReactiveShape::Single.as_str(), "single");
    assert_eq!(ReactiveShape::Multi.to_string(), "multi");
    assert_eq!(ReactiveShape::default(), ReactiveShape::Multi);
}
