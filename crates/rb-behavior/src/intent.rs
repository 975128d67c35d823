//! Changes an entity asks rb-sim to make.

use rb_core::EntityId;

/// A state change requested by the entity being processed.
///
/// Produced by [`BehaviorModel`][crate::BehaviorModel] and applied by rb-sim
/// before the next entity runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move to a random patch within `scope` that has no active occupant.
    ///
    /// rb-sim draws the target; if no patch qualifies the entity stays.
    MoveWithin { scope: u32 },

    /// Record the agent's latest rebellion decision.
    SetRebel(bool),

    /// Jail `suspect` for `jail_term` ticks and move the acting cop onto the
    /// suspect's patch.
    Arrest {
        suspect:   EntityId,
        jail_term: u32,
    },
}
