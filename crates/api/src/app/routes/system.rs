use std::sync::Arc;

use axum::{extract::Extension, Json};
use chrono::Utc;

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn root(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    Json(dto::welcome_to_json(services.service_name()))
}

/// Liveness probe; does not touch the item store.
pub async fn health(Extension(services): Extension<Arc<AppServices>>) -> Json<serde_json::Value> {
    Json(dto::health_to_json(services.service_name(), Utc::now()))
}
