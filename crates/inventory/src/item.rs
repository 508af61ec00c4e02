use chrono::{DateTime, Utc};
use serde::Serialize;

use shelf_core::ItemId;

/// Input for creating an item, as decoded by the request boundary.
///
/// `name` is expected to be present; the store does not validate it further.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
}

impl NewItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            price,
            tax: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_tax(mut self, tax: f64) -> Self {
        self.tax = Some(tax);
        self
    }

    /// Total the stored item will carry. Can be infinite when the inputs
    /// overflow `f64`.
    pub fn total_price(&self) -> f64 {
        total_price(self.price, self.tax)
    }
}

/// Derive the total price from a base price and an optional tax rate.
///
/// An absent tax and a tax of exactly zero both leave the price untouched.
/// Any other rate (including negative ones) is applied as `price * tax`.
pub fn total_price(price: f64, tax: Option<f64>) -> f64 {
    match tax {
        None => price,
        Some(rate) if rate == 0.0 => price,
        Some(rate) => price + price * rate,
    }
}

/// A stored item.
///
/// Items are immutable once created: every field, including the derived
/// `total_price` and the `created_at` stamp, is fixed by the store at creation.
/// `tax` is kept on the record but not part of the wire representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
    price: f64,
    #[serde(skip)]
    tax: Option<f64>,
    total_price: f64,
    created_at: DateTime<Utc>,
}

impl Item {
    pub(crate) fn assemble(id: ItemId, new: NewItem, created_at: DateTime<Utc>) -> Self {
        let total_price = new.total_price();
        Self {
            id,
            name: new.name,
            description: new.description,
            price: new.price,
            tax: new.tax,
            total_price,
            created_at,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn tax(&self) -> Option<f64> {
        self.tax
    }

    pub fn total_price(&self) -> f64 {
        self.total_price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn tax_is_applied_as_a_fractional_rate() {
        assert!((total_price(10.0, Some(0.1)) - 11.0).abs() < 1e-9);
    }

    #[test]
    fn missing_or_zero_tax_leaves_price_unchanged() {
        assert_eq!(total_price(10.0, None), 10.0);
        assert_eq!(total_price(10.0, Some(0.0)), 10.0);
        assert_eq!(total_price(10.0, Some(-0.0)), 10.0);
    }

    #[test]
    fn negative_tax_is_not_special_cased() {
        assert!((total_price(10.0, Some(-0.5)) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn assemble_derives_total_and_keeps_inputs() {
        let new = NewItem::new("Widget", 9.99)
            .with_description("blue")
            .with_tax(0.08);
        let item = Item::assemble(ItemId::FIRST, new, test_time());

        assert_eq!(item.id(), ItemId::FIRST);
        assert_eq!(item.name(), "Widget");
        assert_eq!(item.description(), Some("blue"));
        assert_eq!(item.price(), 9.99);
        assert_eq!(item.tax(), Some(0.08));
        assert!((item.total_price() - 10.7892).abs() < 1e-9);
        assert_eq!(item.created_at(), test_time());
    }

    #[test]
    fn wire_form_omits_tax_and_renders_iso_timestamp() {
        let item = Item::assemble(ItemId::new(3), NewItem::new("Gadget", 10.0), test_time());
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Gadget");
        assert!(json["description"].is_null());
        assert_eq!(json["price"], 10.0);
        assert_eq!(json["total_price"], 10.0);
        assert_eq!(json["created_at"], "2024-05-01T12:30:00Z");
        assert!(json.get("tax").is_none());
    }

    #[test]
    fn overflowing_total_is_not_finite() {
        let new = NewItem::new("Huge", 1e308).with_tax(10.0);
        assert!(new.total_price().is_infinite());
        assert!(NewItem::new("Small", 1e300).with_tax(0.5).total_price().is_finite());
    }
}
