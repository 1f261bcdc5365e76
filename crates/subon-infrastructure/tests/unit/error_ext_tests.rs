//! Error Extension Tests

use std::error::Error as _;
use std::io;

use subon_domain::error::{Error, Result};
use subon_infrastructure::error_ext::ErrorContext;

#[test]
fn test_context_wraps_as_infrastructure_error() {
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");

    let result: Result<()> = Err(io_error).context("failed to read file");

    match result {
        Err(Error::Infrastructure { message, source }) => {
            assert!(message.contains("failed to read file"));
            assert!(message.contains("file not found"));
            assert!(source.is_some());
        }
        other => panic!("Expected Infrastructure error, got {other:?}"),
    }
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let io_error = io::Error::other("bad value");

    let err = Err::<(), _>(io_error).config_context("invalid section").unwrap_err();

    assert!(matches!(err, Error::Configuration { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_with_context_is_lazy() {
    let mut evaluated = false;
    let ok: std::result::Result<u8, io::Error> = Ok(7);

    let value = ok
        .with_context(|| {
            evaluated = true;
            "never built"
        })
        .unwrap();

    assert_eq!(value, 7);
    assert!(!evaluated);
}
