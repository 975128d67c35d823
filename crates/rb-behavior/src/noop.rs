//! A behavior model whose entities never produce intents.

use rb_core::{EntityId, SimRng};

use crate::{BehaviorModel, BehaviorResult, Intent, SimContext};

/// A [`BehaviorModel`] that always returns an empty intent list.
///
/// Entities stay where they were placed and agents stay quiet.  Useful for
/// exercising placement and summaries without any dynamics.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoopBehavior;

impl BehaviorModel for NoopBehavior {
    fn plan_move(&self, _entity: EntityId, _ctx: &SimContext<'_>) -> BehaviorResult<Vec<Intent>> {
        Ok(vec![])
    }

    fn plan_act(
        &self,
        _entity: EntityId,
        _ctx:    &SimContext<'_>,
        _rng:    &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        Ok(vec![])
    }
}
