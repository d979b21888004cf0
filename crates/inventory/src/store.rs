//! In-memory inventory collection.

use tracing::debug;

use omnisuite_core::{RecordId, Revision, next_id};

use crate::item::{InventoryItem, ItemDraft};

/// Owned, in-memory inventory collection.
///
/// Mutations are unconditional; validation happens in the form layer before a
/// draft reaches the store. Every mutation bumps the revision used by the
/// stats cache. State lives for the session only and resets to the seed on
/// restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemStore {
    items: Vec<InventoryItem>,
    revision: Revision,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the sample records shown on first load.
    pub fn seeded() -> Self {
        let mut store = Self::new();
        for draft in seed_items() {
            store.save(draft);
        }
        store
    }

    /// Upsert. A draft carrying the identifier of an existing record replaces
    /// that record's fields (identifier preserved); any other draft is
    /// appended under a freshly assigned identifier.
    pub fn save(&mut self, draft: ItemDraft) -> RecordId {
        let existing = draft
            .id
            .and_then(|id| self.items.iter().position(|i| i.id == id));
        let id = match existing {
            Some(pos) => {
                let id = self.items[pos].id;
                self.items[pos] = draft.into_item(id);
                debug!(%id, "inventory item replaced");
                id
            }
            None => {
                let id = next_id(&self.items);
                self.items.push(draft.into_item(id));
                debug!(%id, "inventory item added");
                id
            }
        };
        self.revision.bump();
        id
    }

    /// Removes the record with the matching identifier. No-op when absent.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.revision.bump();
            debug!(%id, "inventory item removed");
        }
        removed
    }

    /// Replaces the record's quantity with `quantity + delta`.
    ///
    /// No bounds check here: callers validate through
    /// [`validate_adjustment`](crate::adjustment::validate_adjustment) first.
    /// Returns `false` when the identifier is absent.
    pub fn adjust(&mut self, id: RecordId, delta: i64) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity += delta;
                let quantity = item.quantity;
                self.revision.bump();
                debug!(%id, delta, quantity, "stock adjusted");
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&InventoryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter()
    }

    pub fn items(&self) -> &[InventoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn revision(&self) -> Revision {
        self.revision
    }
}

/// Sample records shown on first load.
fn seed_items() -> Vec<ItemDraft> {
    [
        ("Wireless Mouse", "WM-1001", "Electronics", 150, 2599),
        ("Mechanical Keyboard", "MK-2023", "Electronics", 8, 12000),
        ("Ergonomic Office Chair", "OC-500-BLK", "Furniture", 45, 35050),
        ("USB-C Hub", "HUB-C-8P", "Accessories", 200, 4999),
        ("27-inch 4K Monitor", "MON-4K-27", "Electronics", 0, 45000),
    ]
    .into_iter()
    .map(|(name, sku, category, quantity, unit_price)| ItemDraft {
        id: None,
        name: name.to_string(),
        sku: sku.to_string(),
        category: category.to_string(),
        quantity,
        unit_price,
    })
    .collect()
}
