//! Collection revision counter.

use serde::{Deserialize, Serialize};

/// Monotonically increasing revision of a collection's state.
///
/// Bumped once per mutation. Serves as the invalidation key for derived data
/// (see the inventory stats cache), so caches never have to inspect collection
/// contents.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revision(u64);

impl Revision {
    pub fn bump(&mut self) {
        self.0 += 1;
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
