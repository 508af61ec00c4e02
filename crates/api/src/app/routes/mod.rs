use axum::{routing::get, Router};

use crate::app::errors;

pub mod items;
pub mod system;

/// Router for every endpoint the service exposes.
pub fn router() -> Router {
    Router::new()
        .route("/", get(system::root).fallback(errors::method_not_allowed))
        .route("/health", get(system::health).fallback(errors::method_not_allowed))
        .merge(items::router())
        .fallback(errors::not_found)
}
