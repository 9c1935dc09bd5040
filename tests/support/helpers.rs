// tests/support/helpers.rs
use axum::body;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use once_cell::sync::Lazy;
use problem_kit::{
    NamingConvention, ProblemProjector,
    application::services::ApplicationServices,
    domain::{account::AccountRepository, naming},
    infrastructure::InMemoryAccountRepository,
    presentation::http::{APPLICATION_PROBLEM_JSON, routes::build_router, state::HttpState},
};
use serde_json::Value;
use std::sync::Arc;

pub static CONVENTION: Lazy<NamingConvention> = Lazy::new(|| {
    assert!(naming::install(NamingConvention::CamelCase), "naming installed twice");
    naming::current()
});

pub fn build_test_state() -> HttpState {
    let account_repo: Arc<dyn AccountRepository> = Arc::new(InMemoryAccountRepository::new());
    Lazy::force(&CONVENTION);
    HttpState {
        services: Arc::new(ApplicationServices::new(account_repo)),
        projector: ProblemProjector::default(),
    }
}

pub fn make_test_router() -> axum::Router {
    build_router(build_test_state(), &["http://localhost:3000".to_string()])
}

pub fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("expected valid json body")
}

/// Assert that a response is a problem payload with the expected status and
/// return its JSON for further checks.
pub async fn assert_problem_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
) -> Value {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert_eq!(ct, APPLICATION_PROBLEM_JSON, "unexpected content-type: {ct}");
    let json = read_json(resp).await;
    assert_eq!(json["status"], expected_status.as_u16());
    assert!(json["type"].as_str().is_some_and(|t| t.starts_with("https://tools.ietf.org/")));
    assert!(json["errors"].is_object(), "errors must always be an object");
    json
}
