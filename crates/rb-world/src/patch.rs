//! A single grid cell.

use rb_core::EntityId;

use crate::ActivityView;

/// One cell of the toroidal grid.
///
/// Occupants are kept in arrival order.  The list is mutated only through
/// [`World`](crate::World), which keeps it in step with the entity index.
#[derive(Clone, Debug)]
pub struct Patch {
    x:         u32,
    y:         u32,
    occupants: Vec<EntityId>,
}

impl Patch {
    /// An empty patch at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y, occupants: Vec::new() }
    }

    #[inline]
    pub fn coords(&self) -> (u32, u32) {
        (self.x, self.y)
    }

    #[inline]
    pub fn occupants(&self) -> &[EntityId] {
        &self.occupants
    }

    #[inline]
    pub fn contains(&self, entity: EntityId) -> bool {
        self.occupants.contains(&entity)
    }

    /// Append `entity` to the occupant list.
    pub(crate) fn add(&mut self, entity: EntityId) {
        self.occupants.push(entity);
    }

    /// Remove `entity`, preserving the order of the remaining occupants.
    ///
    /// Returns `None` (and changes nothing) if `entity` is not here.
    pub(crate) fn remove(&mut self, entity: EntityId) -> Option<EntityId> {
        let pos = self.occupants.iter().position(|&e| e == entity)?;
        Some(self.occupants.remove(pos))
    }

    pub(crate) fn clear(&mut self) {
        self.occupants.clear();
    }

    /// `true` if at least one entity is here, active or not.
    #[inline]
    pub fn is_occupied(&self) -> bool {
        !self.occupants.is_empty()
    }

    /// `true` if any current occupant is active according to `view`.
    ///
    /// Evaluated on every call: a jailed agent becomes active again the
    /// moment its sentence runs out, without the patch being told.
    pub fn has_active_occupant<V: ActivityView + ?Sized>(&self, view: &V) -> bool {
        self.occupants.iter().any(|&e| view.is_active(e))
    }

    /// Number of active occupants according to `view`.
    pub fn active_occupant_count<V: ActivityView + ?Sized>(&self, view: &V) -> usize {
        self.occupants.iter().filter(|&&e| view.is_active(e)).count()
    }
}
