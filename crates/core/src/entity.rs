//! Entity trait: identity + continuity across state changes.

use crate::id::RecordId;

/// Entity marker + minimal interface for records held in a collection.
pub trait Entity {
    /// Returns the record identifier.
    fn id(&self) -> RecordId;
}

/// Next identifier for a collection: `max(existing) + 1`, or 1 when empty.
///
/// Deleting the highest records makes their identifiers eligible for
/// reassignment; within a single in-memory session this cannot collide with a
/// live record.
pub fn next_id<E: Entity>(records: &[E]) -> RecordId {
    records
        .iter()
        .map(|r| r.id())
        .max()
        .map_or(RecordId::FIRST, RecordId::next)
}
