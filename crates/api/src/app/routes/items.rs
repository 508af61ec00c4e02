use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use shelf_core::ItemId;
use shelf_inventory::NewItem;

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/items", get(list_items).post(create_item).fallback(errors::method_not_allowed))
        .route("/items/", get(list_items).post(create_item).fallback(errors::method_not_allowed))
        .route("/items/:id", get(get_item).delete(delete_item).fallback(errors::method_not_allowed))
}

fn parse_id(raw: &str) -> Result<ItemId, axum::response::Response> {
    raw.parse().map_err(errors::domain_error_to_response)
}

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CreateItemRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return errors::json_rejection_to_response(rejection),
    };

    let new_item = NewItem::from(body);
    // JSON has no encoding for inf/NaN, so such an item could never be returned.
    if !new_item.total_price().is_finite() {
        return errors::json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "total_price is not a finite number",
        );
    }

    let item = services.items().create(new_item);
    (StatusCode::CREATED, Json(item)).into_response()
}

pub async fn list_items(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    (StatusCode::OK, Json(services.items().list())).into_response()
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.items().get(id) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.items().delete(id) {
        Ok(item) => (StatusCode::OK, Json(dto::deleted_item_to_json(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
