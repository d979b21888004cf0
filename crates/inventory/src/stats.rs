//! Derived inventory statistics.

use omnisuite_core::Revision;

use crate::item::InventoryItem;
use crate::store::ItemStore;

/// Items with `0 < quantity < LOW_STOCK_THRESHOLD` count as low stock.
/// Fixed, not configurable.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// Aggregate figures for the dashboard header cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InventoryStats {
    /// Σ quantity × unit price across all records, in cents.
    pub total_value: u64,
    /// Σ quantity across all records.
    pub total_units: i64,
    /// Records with `0 < quantity < LOW_STOCK_THRESHOLD`.
    pub low_stock: usize,
    /// Records with `quantity == 0`.
    pub out_of_stock: usize,
}

impl InventoryStats {
    /// Pure fold over the collection; recomputed whenever it changes.
    pub fn compute<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a InventoryItem>,
    {
        let mut stats = Self::default();
        for item in items {
            stats.total_value = stats.total_value.saturating_add(item.line_value());
            stats.total_units += item.quantity;
            if item.quantity == 0 {
                stats.out_of_stock += 1;
            } else if (1..LOW_STOCK_THRESHOLD).contains(&item.quantity) {
                stats.low_stock += 1;
            }
        }
        stats
    }

    /// Total value rendered as dollars, e.g. `30629.00`.
    pub fn total_value_display(&self) -> String {
        format!("{}.{:02}", self.total_value / 100, self.total_value % 100)
    }
}

/// Memoized statistics keyed on the store revision.
///
/// The revision is the whole invalidation story: no content hashing, no
/// hidden cache state. Recompute-on-every-read would be just as correct.
#[derive(Debug, Clone, Default)]
pub struct StatsCache {
    cached: Option<(Revision, InventoryStats)>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stats, recomputing only when the store revision moved.
    pub fn get(&mut self, store: &ItemStore) -> InventoryStats {
        let revision = store.revision();
        match self.cached {
            Some((rev, stats)) if rev == revision => stats,
            _ => {
                let stats = InventoryStats::compute(store.iter());
                self.cached = Some((revision, stats));
                stats
            }
        }
    }
}
