//! Outcome of a storage or controller operation.
//!
//! Failures never cross the library boundary as panics or `Err` values that
//! lose the attempted data. An [`Outcome`] is either a success carrying the
//! value, or a failure carrying an [`ErrorKind`] plus whatever partial value
//! the operation can still report (the record a failed `add` tried to store,
//! the empty collection a failed read falls back to).

use thiserror::Error;

/// Discrete failure kinds reported by the database and controllers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// The database file could not be opened or read.
    #[error("database read error")]
    Read,
    /// The database file is not valid JSON (or not the expected shape).
    #[error("invalid JSON in database")]
    Parse,
    /// The database file could not be written.
    #[error("database write error")]
    Write,
    /// The record is already present in the collection.
    #[error("item already exists")]
    Duplicate,
    /// The position does not address a record.
    #[error("invalid item id")]
    InvalidId,
}

/// Tagged result: success with a value, or failure with a kind and an
/// optional partial value.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure {
        kind: ErrorKind,
        partial: Option<T>,
    },
}

impl<T> Outcome<T> {
    /// Failure that still echoes a value back to the caller.
    pub fn failure_with(kind: ErrorKind, partial: T) -> Self {
        Outcome::Failure {
            kind,
            partial: Some(partial),
        }
    }

    /// Failure with nothing to report.
    pub fn failure(kind: ErrorKind) -> Self {
        Outcome::Failure {
            kind,
            partial: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// The failure kind, `None` on success.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { kind, .. } => Some(*kind),
        }
    }

    /// The success value or the partial value of a failure.
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { partial, .. } => partial.as_ref(),
        }
    }

    /// Drop any partial value and convert into a plain `Result`.
    pub fn into_result(self) -> Result<T, ErrorKind> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure { kind, .. } => Err(kind),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure { kind, partial } => Outcome::Failure {
                kind,
                partial: partial.map(f),
            },
        }
    }
}
