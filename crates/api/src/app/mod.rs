//! HTTP API application wiring (Axum router + service wiring).
//!
//! - `services.rs`: the shared state handed to every handler (item store, service name)
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs` and tests).
///
/// The store inside `services` is the single owner of item state; build one per
/// process, or one per test for isolation.
pub fn build_app(services: Arc<services::AppServices>) -> Router {
    routes::router()
        .layer(Extension(services))
        .layer(ServiceBuilder::new().layer(axum::middleware::from_fn(middleware::log_requests)))
}
