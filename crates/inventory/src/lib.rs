//! Inventory domain module.
//!
//! Owns the item lifecycle: identity assignment, total-price derivation and
//! the in-memory store that keeps items until they are deleted. No IO, no HTTP.

pub mod item;
pub mod store;

pub use item::{Item, NewItem, total_price};
pub use store::{InMemoryItemStore, ItemListing, ItemStore};
