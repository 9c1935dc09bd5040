// src/domain/outcome.rs
use super::errors::{DomainError, ErrorKind};

/// Result of an operation: a value (unit for the no-payload form) or exactly
/// one [`DomainError`].
///
/// An `Outcome` never raises on its own. [`Outcome::throw_if_failure`] and
/// [`Outcome::into_result`] are the explicit bridges back into `?`-based
/// propagation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an Outcome may hold a failure that should be handled"]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(DomainError),
}

impl Outcome<()> {
    /// Success with no payload.
    pub const fn success() -> Self {
        Self::Success(())
    }
}

impl<T> Outcome<T> {
    pub const fn succeed(value: T) -> Self {
        Self::Success(value)
    }

    pub const fn fail(error: DomainError) -> Self {
        Self::Failure(error)
    }

    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub const fn is_failure(&self) -> bool {
        !self.is_success()
    }

    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub const fn error(&self) -> Option<&DomainError> {
        match self {
            Self::Success(_) => None,
            Self::Failure(err) => Some(err),
        }
    }

    pub fn kind(&self) -> Option<ErrorKind> {
        self.error().map(DomainError::kind)
    }

    /// The contained value, or `default` when this is a failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    pub fn unwrap_or_else(self, f: impl FnOnce(DomainError) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(err) => f(err),
        }
    }

    /// Value-producing match: exactly one continuation runs, once.
    #[doc(alias = "match")]
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(DomainError) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(err) => on_failure(err),
        }
    }

    /// Side-effecting match over a borrowed outcome.
    pub fn switch(&self, on_success: impl FnOnce(&T), on_failure: impl FnOnce(&DomainError)) {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(err) => on_failure(err),
        }
    }

    /// Re-raise a contained failure so it can travel with `?`. A success is a
    /// no-op.
    pub fn throw_if_failure(&self) -> Result<(), DomainError> {
        match self {
            Self::Success(_) => Ok(()),
            Self::Failure(err) => Err(err.clone()),
        }
    }

    pub fn into_result(self) -> Result<T, DomainError> {
        self.into()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Success(value) => Outcome::Success(f(value)),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Self::Success(value) => f(value),
            Self::Failure(err) => Outcome::Failure(err),
        }
    }
}

impl<T> From<Result<T, DomainError>> for Outcome<T> {
    fn from(result: Result<T, DomainError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(err) => Self::Failure(err),
        }
    }
}

impl<T> From<Outcome<T>> for Result<T, DomainError> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(err) => Err(err),
        }
    }
}
