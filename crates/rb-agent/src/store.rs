//! Dense entity storage.
//!
//! Every entity of a run lives in one `Vec<Entity>`; the `EntityId` value is
//! the index into it.  Cops come first, agents follow, so the two groups are
//! contiguous id ranges:
//!
//! ```ignore
//! let entity = &population.entities()[id.index()];  // O(1)
//! ```
//!
//! The population never shrinks during a run.  Jailed agents stay in the
//! store (and on the grid); they are merely inactive.

use rb_core::{EntityId, RbError, RbResult};
use rb_world::ActivityView;

use crate::{Agent, AgentStatus, Entity};

/// All entities of one run, indexed by [`EntityId`].
#[derive(Clone, Debug, Default)]
pub struct Population {
    entities:  Vec<Entity>,
    cop_count: usize,
}

impl Population {
    /// Wrap an explicit entity list.  Position in the `Vec` becomes the id.
    pub fn new(entities: Vec<Entity>) -> Self {
        let cop_count = entities.iter().filter(|e| e.is_cop()).count();
        Self { entities, cop_count }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    #[inline]
    pub fn cop_count(&self) -> usize {
        self.cop_count
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.entities.len() - self.cop_count
    }

    #[inline]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Iterator over all `EntityId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + use<> {
        (0..self.entities.len() as u32).map(EntityId)
    }

    #[inline]
    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Like [`get`](Self::get) but reports a missing id as an error.
    pub fn entity(&self, id: EntityId) -> RbResult<&Entity> {
        self.get(id).ok_or(RbError::EntityNotFound(id))
    }

    #[inline]
    pub fn agent(&self, id: EntityId) -> Option<&Agent> {
        self.get(id).and_then(Entity::as_agent)
    }

    /// Mutable access to an agent.
    ///
    /// # Errors
    ///
    /// [`RbError::EntityNotFound`] if `id` is out of range or names a cop.
    pub fn agent_mut(&mut self, id: EntityId) -> RbResult<&mut Agent> {
        self.entities
            .get_mut(id.index())
            .and_then(Entity::as_agent_mut)
            .ok_or(RbError::EntityNotFound(id))
    }

    /// Every agent with its id.
    pub fn agents(&self) -> impl Iterator<Item = (EntityId, &Agent)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.as_agent().map(|a| (EntityId(i as u32), a)))
    }

    pub fn agents_mut(&mut self) -> impl Iterator<Item = &mut Agent> + '_ {
        self.entities.iter_mut().filter_map(Entity::as_agent_mut)
    }

    /// Count agents per status bucket: `(quiet, jailed, rebelling)`.
    pub fn status_counts(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for (_, agent) in self.agents() {
            match agent.status() {
                AgentStatus::Quiet => counts.0 += 1,
                AgentStatus::Jailed => counts.1 += 1,
                AgentStatus::Rebelling => counts.2 += 1,
            }
        }
        counts
    }
}

impl ActivityView for Population {
    /// Unknown ids are treated as inactive.
    #[inline]
    fn is_active(&self, entity: EntityId) -> bool {
        self.get(entity).is_some_and(Entity::is_active)
    }
}
