// src/presentation/http/mod.rs
pub mod controllers;
pub mod dispatch;
pub mod openapi;
pub mod problem;
pub mod routes;
pub mod state;

pub use dispatch::Respond;
pub use problem::{APPLICATION_PROBLEM_JSON, ProblemDetails, ProblemProjector};
