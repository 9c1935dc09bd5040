// src/presentation/http/controllers/accounts.rs
use crate::application::accounts::RegisterAccountCommand;
use crate::domain::{DomainError, Outcome, account::AccountId};
use crate::presentation::http::{dispatch::Respond, state::HttpState};
use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    response::Response,
};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccountRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub display_name: String,
}

fn rejected(err: impl std::fmt::Display) -> DomainError {
    DomainError::invalid(err.to_string())
}

#[utoipa::path(
    post,
    path = "/api/v1/accounts",
    request_body = RegisterAccountRequest,
    responses(
        (status = 200, description = "Account registered.", body = crate::application::dto::AccountDto),
        (status = 400, description = "Validation failed.", body = crate::presentation::http::problem::ProblemDetails, content_type = "application/problem+json"),
        (status = 409, description = "Email already registered.", body = crate::presentation::http::problem::ProblemDetails, content_type = "application/problem+json")
    ),
    tag = "Accounts"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<RegisterAccountRequest>, JsonRejection>,
) -> Response {
    let outcome = match payload {
        Ok(Json(payload)) => {
            let command = RegisterAccountCommand {
                email: payload.email,
                display_name: payload.display_name,
            };
            state.services.accounts.register(command).await
        }
        Err(rejection) => Outcome::fail(rejected(rejection.body_text())),
    };
    outcome.respond_ok_with(&state.projector)
}

#[utoipa::path(
    get,
    path = "/api/v1/accounts/{id}",
    params(("id" = u64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account found.", body = crate::application::dto::AccountDto),
        (status = 404, description = "No such account.", body = crate::presentation::http::problem::ProblemDetails, content_type = "application/problem+json")
    ),
    tag = "Accounts"
)]
pub async fn get_account(
    Extension(state): Extension<HttpState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let outcome = match id {
        Ok(Path(id)) => state.services.accounts.get(AccountId(id)).await,
        Err(rejection) => Outcome::fail(rejected(rejection.body_text())),
    };
    outcome.respond_ok_with(&state.projector)
}

#[utoipa::path(
    delete,
    path = "/api/v1/accounts/{id}",
    params(("id" = u64, Path, description = "Account id")),
    responses(
        (status = 204, description = "Account deleted."),
        (status = 404, description = "No such account.", body = crate::presentation::http::problem::ProblemDetails, content_type = "application/problem+json")
    ),
    tag = "Accounts"
)]
pub async fn delete_account(
    Extension(state): Extension<HttpState>,
    id: Result<Path<u64>, PathRejection>,
) -> Response {
    let outcome = match id {
        Ok(Path(id)) => state.services.accounts.delete(AccountId(id)).await,
        Err(rejection) => Outcome::fail(rejected(rejection.body_text())),
    };
    outcome.respond_no_content_with(&state.projector)
}
