//! The `BehaviorModel` trait: the extension point for decision rules.

use rb_core::{EntityId, SimRng};

use crate::{BehaviorResult, Intent, SimContext};

/// Pluggable entity behavior.
///
/// Each tick, rb-sim calls [`plan_move`][Self::plan_move] and then
/// [`plan_act`][Self::plan_act] for every entity in a freshly shuffled
/// order, applying the returned intents between calls.
///
/// Random choices made while planning draw from the run's single
/// [`SimRng`], so a model must draw in the same order for the same inputs
/// to keep runs reproducible.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysRebel;
///
/// impl BehaviorModel for AlwaysRebel {
///     fn plan_move(&self, _: EntityId, _: &SimContext<'_>) -> BehaviorResult<Vec<Intent>> {
///         Ok(vec![])
///     }
///
///     fn plan_act(
///         &self,
///         entity: EntityId,
///         ctx:    &SimContext<'_>,
///         _rng:   &mut SimRng,
///     ) -> BehaviorResult<Vec<Intent>> {
///         let agent = ctx.population.agent(entity).is_some();
///         Ok(if agent { vec![Intent::SetRebel(true)] } else { vec![] })
///     }
/// }
/// ```
pub trait BehaviorModel: Send + Sync + 'static {
    /// Movement for `entity`.  An empty `Vec` keeps it in place.
    fn plan_move(&self, entity: EntityId, ctx: &SimContext<'_>) -> BehaviorResult<Vec<Intent>>;

    /// The entity's action after moving.
    fn plan_act(
        &self,
        entity: EntityId,
        ctx:    &SimContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>>;
}
