// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::accounts::register,
        crate::presentation::http::controllers::accounts::get_account,
        crate::presentation::http::controllers::accounts::delete_account,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::problem::ProblemDetails,
            crate::presentation::http::controllers::accounts::RegisterAccountRequest,
            crate::application::dto::AccountDto
        )
    ),
    tags(
        (name = "Accounts", description = "Demo endpoints exercising outcome dispatch"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "problem_kit demo API",
        description = "Outcome dispatch and problem-details projection",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new()
        .route("/openapi.json", get(serve_openapi))
        .route("/", get(|| async { Redirect::permanent("/openapi.json") }))
}
