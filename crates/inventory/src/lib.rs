//! Inventory domain module.
//!
//! Pure in-memory collection management: no IO, no HTTP, no storage. The
//! store accepts whatever it is handed; required-field rules live in the form
//! payload ([`ItemDraft::validate`]) and stock bounds in the adjustment
//! validator ([`validate_adjustment`]).

pub mod adjustment;
pub mod item;
pub mod stats;
pub mod store;

pub use adjustment::{AdjustmentError, validate_adjustment};
pub use item::{InventoryItem, ItemDraft};
pub use stats::{InventoryStats, LOW_STOCK_THRESHOLD, StatsCache};
pub use store::ItemStore;
