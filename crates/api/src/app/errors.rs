use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use shelf_core::DomainError;

pub const ITEM_NOT_FOUND: &str = "Item not found";

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::NotFound(_) => json_error(StatusCode::NOT_FOUND, ITEM_NOT_FOUND),
        DomainError::InvalidId(_) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "invalid item id"),
    }
}

/// Body decoding failures keep axum's status (400 syntax, 415 content type,
/// 422 shape) but use the common `{detail}` body.
pub fn json_rejection_to_response(rejection: JsonRejection) -> axum::response::Response {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    json_error(rejection.status(), rejection.body_text())
}

/// Fallback for paths no route matches.
pub async fn not_found() -> axum::response::Response {
    json_error(StatusCode::NOT_FOUND, "Not Found")
}

/// Fallback for a matched path called with a method it does not serve.
pub async fn method_not_allowed() -> axum::response::Response {
    json_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}

pub fn json_error(status: StatusCode, detail: impl Into<String>) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "detail": detail.into(),
        })),
    )
        .into_response()
}
