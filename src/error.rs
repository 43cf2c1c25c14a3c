//! Domain errors shared by every container.

use crate::semantics::ValueSemantics;
use thiserror::Error;

pub type Result<T, E = CollectionError> = core::result::Result<T, E>;

/// Coarse classification of a `CollectionError`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    NotFound,
    AlreadyExists,
    OutOfBounds,
    Aggregate,
}

/// Failure of a container operation. Values are carried in their display
/// form as produced by the container's semantics.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum CollectionError {
    #[error("not found: {value}")]
    NotFound { value: String },

    #[error("already exists: {value}")]
    AlreadyExists { value: String },

    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// Every failure of a bulk operation, in the order it happened.
    #[error("{} element operations failed", .0.len())]
    Aggregate(Vec<CollectionError>),
}

impl CollectionError {
    pub(crate) fn not_found<T, S>(semantics: &S, value: &T) -> Self
    where
        T: ?Sized,
        S: ValueSemantics<T> + ?Sized,
    {
        CollectionError::NotFound {
            value: semantics.render(value),
        }
    }

    pub(crate) fn already_exists<T, S>(semantics: &S, value: &T) -> Self
    where
        T: ?Sized,
        S: ValueSemantics<T> + ?Sized,
    {
        CollectionError::AlreadyExists {
            value: semantics.render(value),
        }
    }

    pub(crate) fn out_of_bounds(index: usize, len: usize) -> Self {
        CollectionError::OutOfBounds { index, len }
    }

    /// `Ok(())` when nothing failed, otherwise one aggregate holding every
    /// failure.
    pub fn aggregate(failures: Vec<CollectionError>) -> Result<()> {
        if failures.is_empty() {
            Ok(())
        } else {
            Err(CollectionError::Aggregate(failures))
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::NotFound { .. } => ErrorKind::NotFound,
            CollectionError::AlreadyExists { .. } => ErrorKind::AlreadyExists,
            CollectionError::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            CollectionError::Aggregate(_) => ErrorKind::Aggregate,
        }
    }

    /// The individual failures: an aggregate's parts, or the error itself.
    pub fn errors(&self) -> &[CollectionError] {
        match self {
            CollectionError::Aggregate(errors) => errors,
            other => core::slice::from_ref(other),
        }
    }
}
