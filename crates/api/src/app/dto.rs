use serde::Deserialize;

use shelf_inventory::{Item, NewItem};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub tax: Option<f64>,
}

impl From<CreateItemRequest> for NewItem {
    fn from(body: CreateItemRequest) -> Self {
        NewItem {
            name: body.name,
            description: body.description,
            price: body.price,
            tax: body.tax,
        }
    }
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn deleted_item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "message": "Item deleted successfully",
        "deleted_item": item,
    })
}

pub fn welcome_to_json(service_name: &str) -> serde_json::Value {
    serde_json::json!({
        "message": format!("Welcome to {service_name}"),
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": "/health",
            "items": "/items",
        },
    })
}

pub fn health_to_json(service_name: &str, now: chrono::DateTime<chrono::Utc>) -> serde_json::Value {
    serde_json::json!({
        "status": "healthy",
        "timestamp": now.to_rfc3339_opts(chrono::SecondsFormat::Micros, true),
        "service": service_name,
    })
}
