// src/presentation/http/dispatch.rs
use super::problem::{ProblemDetails, ProblemProjector};
use crate::domain::Outcome;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Turn an [`Outcome`] into an HTTP response without writing the match by
/// hand. Failures always go through a [`ProblemProjector`].
pub trait Respond: Sized {
    /// 200 with the value as JSON, or the projected problem.
    fn respond_ok_with(self, projector: &ProblemProjector) -> Response;

    /// 204 with an empty body, or the projected problem.
    fn respond_no_content_with(self, projector: &ProblemProjector) -> Response;

    fn respond_ok(self) -> Response {
        self.respond_ok_with(&ProblemProjector::default())
    }

    fn respond_no_content(self) -> Response {
        self.respond_no_content_with(&ProblemProjector::default())
    }
}

impl<T: Serialize> Respond for Outcome<T> {
    fn respond_ok_with(self, projector: &ProblemProjector) -> Response {
        self.fold(
            |value| (StatusCode::OK, Json(value)).into_response(),
            |err| projector.project(&err).into_response(),
        )
    }

    fn respond_no_content_with(self, projector: &ProblemProjector) -> Response {
        self.fold(
            |_| StatusCode::NO_CONTENT.into_response(),
            |err| projector.project(&err).into_response(),
        )
    }
}

impl<T> Outcome<T> {
    /// The projected payload for a failure; `None` on success.
    pub fn problem(&self) -> Option<ProblemDetails> {
        self.problem_with(&ProblemProjector::default())
    }

    pub fn problem_with(&self, projector: &ProblemProjector) -> Option<ProblemDetails> {
        self.error().map(|err| projector.project(err))
    }
}

impl<T: IntoResponse> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Success(value) => value.into_response(),
            Self::Failure(err) => err.into_response(),
        }
    }
}
