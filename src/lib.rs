//! Outcome container, domain error taxonomy and problem-details projection
//! for Axum services.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

pub use domain::{DomainError, ErrorKind, FieldErrors, NamingConvention, Outcome};
pub use presentation::http::{ProblemDetails, ProblemProjector, Respond};
