// src/presentation/http/problem.rs
use crate::domain::{DomainError, FieldErrors, NamingConvention, classify, naming};
use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use utoipa::ToSchema;

pub const APPLICATION_PROBLEM_JSON: &str = "application/problem+json";

/// Client-facing error payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetails {
    pub status: u16,
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    #[schema(value_type = std::collections::HashMap<String, Vec<String>>)]
    pub errors: IndexMap<String, Vec<String>>,
}

impl ProblemDetails {
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl IntoResponse for ProblemDetails {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = self.status, title = %self.title, "server error response");
        }
        (
            status,
            [(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_PROBLEM_JSON))],
            Json(self),
        )
            .into_response()
    }
}

/// Turns errors into [`ProblemDetails`], spelling field names with one
/// [`NamingConvention`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProblemProjector {
    convention: NamingConvention,
}

impl Default for ProblemProjector {
    /// Uses the process-wide convention.
    fn default() -> Self {
        Self::new(naming::current())
    }
}

impl ProblemProjector {
    pub const fn new(convention: NamingConvention) -> Self {
        Self { convention }
    }

    pub const fn convention(&self) -> NamingConvention {
        self.convention
    }

    pub fn project(&self, err: &DomainError) -> ProblemDetails {
        let kind = err.kind();
        tracing::debug!(%kind, fields = err.field_errors().len(), "projecting domain error");
        ProblemDetails {
            status: kind.status().as_u16(),
            problem_type: kind.problem_type().to_owned(),
            title: err.message().to_owned(),
            errors: self.normalize_fields(err.field_errors()),
        }
    }

    /// Project any error. Anything that is not a [`DomainError`] becomes an
    /// unclassified 500 with no field detail.
    pub fn project_any(&self, err: &(dyn StdError + 'static)) -> ProblemDetails {
        if let Some(domain) = err.downcast_ref::<DomainError>() {
            return self.project(domain);
        }
        let kind = classify(err);
        tracing::warn!(error = %err, "projecting unclassified error");
        ProblemDetails {
            status: kind.status().as_u16(),
            problem_type: kind.problem_type().to_owned(),
            title: err.to_string(),
            errors: IndexMap::new(),
        }
    }

    /// Rename every key with the configured convention. When two raw keys
    /// land on the same name, the one inserted later replaces the earlier
    /// messages.
    pub fn normalize_fields(&self, fields: &FieldErrors) -> IndexMap<String, Vec<String>> {
        let mut normalized = IndexMap::with_capacity(fields.len());
        for (key, messages) in fields.iter() {
            let target = self.convention.apply(key);
            if let Some(previous) = normalized.insert(target, messages.to_vec()) {
                tracing::debug!(raw = key, ?previous, "field error key collision; keeping later entry");
            }
        }
        normalized
    }
}

impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        ProblemProjector::default().project(&self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const CAMEL: ProblemProjector = ProblemProjector::new(NamingConvention::CamelCase);

    #[test]
    fn not_found_without_fields_projects_empty_errors() {
        let problem = CAMEL.project(&DomainError::not_found("X"));
        assert_eq!(
            problem,
            ProblemDetails {
                status: 404,
                problem_type: "https://tools.ietf.org/html/rfc7231#section-6.5.4".into(),
                title: "X".into(),
                errors: IndexMap::new(),
            }
        );
    }

    #[test]
    fn colliding_keys_keep_last_entry() {
        let err = DomainError::invalid("bad input")
            .with_field_errors("UserName", ["required"])
            .with_field_errors("user_name", ["too short"]);
        let problem = CAMEL.project(&err);
        assert_eq!(problem.errors.len(), 1);
        assert_eq!(problem.errors["userName"], ["too short"]);
    }

    #[test]
    fn normalizing_normalized_keys_is_stable() {
        let err = DomainError::invalid("bad")
            .with_field_error("DisplayName", "is required")
            .with_field_error("Email", "is required");
        let once = CAMEL.project(&err).errors;
        let again: FieldErrors = once.clone().into_iter().collect();
        assert_eq!(CAMEL.normalize_fields(&again), once);
    }

    #[test]
    fn other_conventions_are_honoured() {
        let err = DomainError::invalid("bad").with_field_error("DisplayName", "is required");
        let snake = ProblemProjector::new(NamingConvention::SnakeCase).project(&err);
        assert!(snake.errors.contains_key("display_name"));
        let kept = ProblemProjector::new(NamingConvention::Preserve).project(&err);
        assert!(kept.errors.contains_key("DisplayName"));
    }

    #[test]
    fn foreign_errors_become_500() {
        let err = std::io::Error::other("disk on fire");
        let problem = CAMEL.project_any(&err);
        assert_eq!(problem.status, 500);
        assert_eq!(problem.title, "disk on fire");
        assert!(problem.errors.is_empty());
    }

    #[test]
    fn project_any_sees_through_to_domain_errors() {
        let err = DomainError::unauthorized("token expired");
        let problem = CAMEL.project_any(&err);
        assert_eq!(problem.status, 401);
        assert_eq!(problem.problem_type, "https://tools.ietf.org/html/rfc7235#section-3.1");
    }

    #[test]
    fn serialises_with_type_field() {
        let err = DomainError::conflict("Email already registered")
            .with_field_error("Email", "already in use");
        let value = serde_json::to_value(CAMEL.project(&err)).unwrap();
        assert_eq!(
            value,
            json!({
                "status": 409,
                "type": "https://tools.ietf.org/html/rfc7231#section-6.5.8",
                "title": "Email already registered",
                "errors": { "email": ["already in use"] }
            })
        );
    }

    #[test]
    fn response_uses_problem_content_type() {
        let response = CAMEL.project(&DomainError::forbidden("no")).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(
            response.headers().get(CONTENT_TYPE).unwrap(),
            APPLICATION_PROBLEM_JSON
        );
    }
}
