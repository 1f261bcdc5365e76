//! Reactive value shapes
//!
//! A single-value pipeline is a boxed future, a multi-value pipeline a boxed
//! stream. Both carry `Result` items so that failures travel through the
//! same channel as values.

use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream, Stream};
use futures::{FutureExt, StreamExt};
use serde::{Deserialize, Serialize};

/// Single-value asynchronous pipeline
pub type SingleValue<T, E> = BoxFuture<'static, Result<T, E>>;

/// Multi-value asynchronous pipeline
pub type MultiValue<T, E> = BoxStream<'static, Result<T, E>>;

/// Which reactive shape a method returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReactiveShape {
    /// Exactly one eventual result
    Single,
    /// Zero or more eventual results
    #[default]
    Multi,
}

impl ReactiveShape {
    /// Lowercase name used in logs and configuration
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Multi => "multi",
        }
    }
}

impl fmt::Display for ReactiveShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reactive value of either shape
pub enum ReactiveValue<T, E> {
    /// Single-value pipeline
    Single(SingleValue<T, E>),
    /// Multi-value pipeline
    Multi(MultiValue<T, E>),
}

impl<T, E> ReactiveValue<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    /// Box a future as a single-value pipeline
    pub fn single<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::Single(future.boxed())
    }

    /// Box a stream as a multi-value pipeline
    pub fn multi<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<T, E>> + Send + 'static,
    {
        Self::Multi(stream.boxed())
    }

    /// A pipeline of the given shape that fails with `error` and emits nothing else
    pub fn failed(shape: ReactiveShape, error: E) -> Self {
        match shape {
            ReactiveShape::Single => Self::Single(futures::future::ready(Err(error)).boxed()),
            ReactiveShape::Multi => Self::Multi(stream::once(futures::future::ready(Err(error))).boxed()),
        }
    }
}

impl<T, E> ReactiveValue<T, E> {
    /// Shape of this value
    pub fn shape(&self) -> ReactiveShape {
        match self {
            Self::Single(_) => ReactiveShape::Single,
            Self::Multi(_) => ReactiveShape::Multi,
        }
    }

    /// The single-value pipeline, if this is one
    pub fn into_single(self) -> Option<SingleValue<T, E>> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multi(_) => None,
        }
    }

    /// The multi-value pipeline, if this is one
    pub fn into_multi(self) -> Option<MultiValue<T, E>> {
        match self {
            Self::Multi(value) => Some(value),
            Self::Single(_) => None,
        }
    }
}

impl<T, E> fmt::Debug for ReactiveValue<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReactiveValue").field(&self.shape()).finish()
    }
}
