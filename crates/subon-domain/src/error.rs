//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for subon
///
/// Scheduled methods surface these through their own error type, which must
/// implement `From<Error>`. Errors produced by the method itself never pass
/// through this type.
#[derive(Error, Debug)]
pub enum Error {
    /// The registry has no entry for the marker's key
    #[error("No scheduler registered under key '{key}'")]
    SchedulerNotFound {
        /// Registry key taken from the scheduling marker
        key: String,
    },

    /// The registry entry exists but is not a scheduler
    #[error("Component '{key}' is of type {actual_type}, expected a scheduler")]
    SchedulerTypeMismatch {
        /// Registry key taken from the scheduling marker
        key: String,
        /// Runtime type name of the registered component
        actual_type: String,
    },

    /// A scheduling marker could not be constructed
    #[error("Invalid scheduling marker: {message}")]
    InvalidMarker {
        /// Description of the problem
        message: String,
    },

    /// A second marker was attached to an already marked method
    #[error("Method '{method}' already carries a scheduling marker")]
    DuplicateMarker {
        /// Method identity
        method: String,
    },

    /// The scheduler refused to accept a task
    #[error("Scheduler '{scheduler}' rejected task: {message}")]
    SchedulerRejected {
        /// Scheduler name
        scheduler: String,
        /// Description of the rejection
        message: String,
    },

    /// A task bound to a scheduler ended without producing its result
    #[error("Task on scheduler '{scheduler}' failed: {message}")]
    TaskFailed {
        /// Scheduler name
        scheduler: String,
        /// Description of the failure
        message: String,
    },

    /// A component was registered twice under the same key
    #[error("Component '{key}' is already registered")]
    DuplicateComponent {
        /// Registry key
        key: String,
    },

    /// A component lookup found nothing
    #[error("Component '{key}' not found in registry")]
    ComponentNotFound {
        /// Registry key
        key: String,
    },

    /// A component lookup found an entry of another type
    #[error("Component '{key}' is of type {actual_type}, expected {expected_type}")]
    ComponentTypeMismatch {
        /// Registry key
        key: String,
        /// Requested type name
        expected_type: String,
        /// Registered type name
        actual_type: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure failure (runtime construction, file access)
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a scheduler-not-found error
    pub fn scheduler_not_found<S: Into<String>>(key: S) -> Self {
        Self::SchedulerNotFound { key: key.into() }
    }

    /// Create a scheduler type mismatch error
    pub fn scheduler_type_mismatch<K: Into<String>, T: Into<String>>(key: K, actual_type: T) -> Self {
        Self::SchedulerTypeMismatch {
            key: key.into(),
            actual_type: actual_type.into(),
        }
    }

    /// Create an invalid marker error
    pub fn invalid_marker<S: Into<String>>(message: S) -> Self {
        Self::InvalidMarker {
            message: message.into(),
        }
    }

    /// Create a duplicate marker error
    pub fn duplicate_marker<S: Into<String>>(method: S) -> Self {
        Self::DuplicateMarker {
            method: method.into(),
        }
    }

    /// Whether this error comes from resolving a marker against the registry
    pub fn is_resolution_error(&self) -> bool {
        matches!(
            self,
            Self::SchedulerNotFound { .. } | Self::SchedulerTypeMismatch { .. }
        )
    }
}

// Scheduling error creation methods
impl Error {
    /// Create a scheduler rejection error
    pub fn scheduler_rejected<N: Into<String>, M: Into<String>>(scheduler: N, message: M) -> Self {
        Self::SchedulerRejected {
            scheduler: scheduler.into(),
            message: message.into(),
        }
    }

    /// Create a task failure error
    pub fn task_failed<N: Into<String>, M: Into<String>>(scheduler: N, message: M) -> Self {
        Self::TaskFailed {
            scheduler: scheduler.into(),
            message: message.into(),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Infrastructure error creation methods
impl Error {
    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
