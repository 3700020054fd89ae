use chrono::Utc;
use tracing::debug;

use crate::app::types::{Item, ItemId, NewItem};

/// In-memory item collection.
///
/// Nothing here is persisted: every fresh start begins from `seeded()`.
/// Ids handed out by `add` are millisecond timestamps, bumped so that each
/// one is strictly greater than the last issued and not already taken.
#[derive(Clone, Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    last_issued: i64,
}

impl ItemStore {
    /// The fixed starting inventory.
    pub fn seeded() -> Self {
        Self::from_items(vec![
            Item::new("1", "Laptop", "Electronics", 5, 999.99, "High-performance laptop"),
            Item::new("2", "Desk Chair", "Furniture", 12, 199.99, "Ergonomic office chair"),
            Item::new("3", "Printer", "Electronics", 3, 299.99, "Color laser printer"),
        ])
    }

    pub fn from_items(items: Vec<Item>) -> Self {
        ItemStore { items, last_issued: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == *id)
    }

    /// Assign a fresh id and append. Returns the new id.
    pub fn add(&mut self, new_item: NewItem) -> ItemId {
        let id = self.next_id();
        debug!(id = %id, name = %new_item.name, "adding item");
        self.items.push(new_item.with_id(id.clone()));
        id
    }

    /// Replace the item with the same id. Returns `false` when no item matched.
    pub fn update(&mut self, updated: Item) -> bool {
        match self.items.iter_mut().find(|item| item.id == updated.id) {
            Some(slot) => {
                debug!(id = %updated.id, "updating item");
                *slot = updated;
                true
            }
            None => false,
        }
    }

    /// Remove the item with `id`. Returns `false` when no item matched.
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        let removed = self.items.len() != before;
        if removed {
            debug!(id = %id, "removed item");
        }
        removed
    }

    fn next_id(&mut self) -> ItemId {
        let mut candidate = Utc::now().timestamp_millis().max(self.last_issued + 1);
        while self.items.iter().any(|item| item.id.as_str() == candidate.to_string()) {
            candidate += 1;
        }
        self.last_issued = candidate;
        ItemId::new(candidate.to_string())
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::seeded()
    }
}
