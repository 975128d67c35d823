//! Live activity lookups used by occupancy checks.

use rb_core::EntityId;

/// Answers "is this entity active right now?".
///
/// Implemented by the population store.  Any `Fn(EntityId) -> bool` also
/// qualifies, which keeps world-only tests free of a population.
pub trait ActivityView {
    fn is_active(&self, entity: EntityId) -> bool;
}

impl<F> ActivityView for F
where
    F: Fn(EntityId) -> bool,
{
    #[inline]
    fn is_active(&self, entity: EntityId) -> bool {
        self(entity)
    }
}
