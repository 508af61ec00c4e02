use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;

use shelf_core::{DomainError, DomainResult, ItemId};

use crate::item::{Item, NewItem};

/// Snapshot of every stored item plus their count.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemListing {
    pub count: usize,
    pub items: Vec<Item>,
}

/// Authoritative registry of items.
///
/// Implementations own identity assignment: ids are strictly increasing from
/// [`ItemId::FIRST`] and never reused. Callers only ever receive copies.
pub trait ItemStore: Send + Sync {
    /// Assign the next id, derive the total price, stamp `created_at` and
    /// store the record. The item is visible to readers once this returns.
    fn create(&self, new: NewItem) -> Item;

    /// Every stored item. Callers must not rely on the order.
    fn list(&self) -> ItemListing;

    fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Remove and return the item. Fails with `NotFound` without touching the
    /// store when the id is absent.
    fn delete(&self, id: ItemId) -> DomainResult<Item>;
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn create(&self, new: NewItem) -> Item {
        (**self).create(new)
    }

    fn list(&self) -> ItemListing {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        (**self).delete(id)
    }
}

#[derive(Debug)]
struct State {
    next_id: ItemId,
    items: BTreeMap<ItemId, Item>,
}

/// Process-local item store.
///
/// Counter and collection sit behind one lock, so each operation is a single
/// atomic step even under parallel request handling.
#[derive(Debug)]
pub struct InMemoryItemStore {
    state: RwLock<State>,
    clock: fn() -> DateTime<Utc>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::with_clock(Utc::now)
    }

    /// Store whose `created_at` stamps come from `clock` (useful in tests).
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self {
            state: RwLock::new(State {
                next_id: ItemId::FIRST,
                items: BTreeMap::new(),
            }),
            clock,
        }
    }

    // Critical sections never leave `State` half-updated, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for InMemoryItemStore {
    fn create(&self, new: NewItem) -> Item {
        let mut state = self.write();

        let id = state.next_id;
        state.next_id = id.next();

        let item = Item::assemble(id, new, (self.clock)());
        state.items.insert(id, item.clone());
        drop(state);

        tracing::info!(item_id = %id, total_price = item.total_price(), "created item");
        item
    }

    fn list(&self) -> ItemListing {
        let state = self.read();
        let items: Vec<Item> = state.items.values().cloned().collect();
        ItemListing {
            count: items.len(),
            items,
        }
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        let state = self.read();
        state.items.get(&id).cloned().ok_or_else(|| {
            tracing::debug!(item_id = %id, "item lookup missed");
            DomainError::not_found(id)
        })
    }

    fn delete(&self, id: ItemId) -> DomainResult<Item> {
        let removed = self.write().items.remove(&id);
        match removed {
            Some(item) => {
                tracing::info!(item_id = %id, "deleted item");
                Ok(item)
            }
            None => {
                tracing::debug!(item_id = %id, "delete of unknown item");
                Err(DomainError::not_found(id))
            }
        }
    }
}
