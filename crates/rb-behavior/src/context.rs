//! Read-only simulation state passed to every behavior callback.

use rb_agent::Population;
use rb_core::Tick;
use rb_world::World;

/// A read-only view of the simulation passed to every
/// [`BehaviorModel`][crate::BehaviorModel] callback.
///
/// Under the sequential update order rb-sim builds a new context before each
/// callback, so every entity sees the grid as already changed by the
/// entities processed before it in the same tick.
pub struct SimContext<'a> {
    /// Tick being executed.
    pub tick: Tick,

    /// The grid, its entity index and its free-patch pool.
    pub world: &'a World,

    /// Every entity's state, indexed by `EntityId`.
    pub population: &'a Population,
}

impl<'a> SimContext<'a> {
    #[inline]
    pub fn new(tick: Tick, world: &'a World, population: &'a Population) -> Self {
        Self { tick, world, population }
    }
}
