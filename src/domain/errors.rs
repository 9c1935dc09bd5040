// src/domain/errors.rs
use super::field_errors::FieldErrors;
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::{error::Error as StdError, fmt, sync::Arc};
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

type BoxedCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Closed set of failure classifications. `Unclassified` is never produced by
/// the constructors below; it is what [`classify`] reports for foreign errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    NotFound,
    Invalid,
    Conflict,
    Unauthorized,
    Forbidden,
    InternalServerError,
    Unclassified,
}

impl ErrorKind {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Invalid => StatusCode::BAD_REQUEST,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::InternalServerError | Self::Unclassified => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Problem-type URI pointing at the RFC section that defines the status.
    pub const fn problem_type(self) -> &'static str {
        match self {
            Self::NotFound => "https://tools.ietf.org/html/rfc7231#section-6.5.4",
            Self::Invalid => "https://tools.ietf.org/html/rfc7231#section-6.5.1",
            Self::Conflict => "https://tools.ietf.org/html/rfc7231#section-6.5.8",
            Self::Unauthorized => "https://tools.ietf.org/html/rfc7235#section-3.1",
            Self::Forbidden => "https://tools.ietf.org/html/rfc7231#section-6.5.3",
            Self::InternalServerError | Self::Unclassified => {
                "https://tools.ietf.org/html/rfc7231#section-6.6.1"
            }
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Invalid => "invalid",
            Self::Conflict => "conflict",
            Self::Unauthorized => "unauthorized",
            Self::Forbidden => "forbidden",
            Self::InternalServerError => "internal_server_error",
            Self::Unclassified => "unclassified",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify any error. Only a [`DomainError`] carries a kind; everything else
/// degrades to [`ErrorKind::Unclassified`].
pub fn classify(err: &(dyn StdError + 'static)) -> ErrorKind {
    err.downcast_ref::<DomainError>()
        .map_or(ErrorKind::Unclassified, DomainError::kind)
}

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    field_errors: FieldErrors,
    #[source]
    cause: Option<BoxedCause>,
}

impl DomainError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: FieldErrors::new(),
            cause: None,
        }
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Invalid, msg)
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, msg)
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::InternalServerError, msg)
    }

    /// Append one message for `field`.
    #[must_use]
    pub fn with_field_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors.add(field, message);
        self
    }

    /// Replace the messages recorded for `field`.
    #[must_use]
    pub fn with_field_errors<I, S>(mut self, field: impl Into<String>, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_errors.insert(field, messages);
        self
    }

    /// Attach a whole store built up elsewhere, e.g. by a validator.
    #[must_use]
    pub fn with_field_store(mut self, field_errors: FieldErrors) -> Self {
        self.field_errors = field_errors;
        self
    }

    #[must_use]
    pub fn with_source<E>(mut self, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub const fn status(&self) -> StatusCode {
        self.kind.status()
    }
}

impl PartialEq for DomainError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.message == other.message
            && self.field_errors == other.field_errors
    }
}

impl Eq for DomainError {}
