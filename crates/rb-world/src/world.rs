//! The toroidal patch grid and its bookkeeping.
//!
//! # Data layout
//!
//! Patches live in one row-major `Vec`: the patch at `(x, y)` has
//! `PatchId(y * dimension + x)`.  Alongside it:
//!
//! ```text
//! index[entity]   -> PatchId hosting the entity (INVALID when unplaced)
//! free            -> PatchIds with no occupants, in arbitrary order
//! free_slot[p]    -> position of p inside `free`, or NOT_FREE
//! ```
//!
//! `free` + `free_slot` form an indexed set: insert, remove and uniform
//! sampling are all O(1).
//!
//! # Neighborhoods
//!
//! The neighborhood of radius `scope` around `(x, y)` is the
//! `(2·scope+1)²` square centered there, wrapped on both axes.  Each axis
//! window is computed once as a list of distinct coordinates; once
//! `2·scope+1 >= dimension` the window is simply every coordinate.  The
//! cartesian product of two duplicate-free axis windows visits each patch
//! exactly once, so no patch is ever counted twice even when the wrap
//! reaches all the way around.

use rb_core::{EntityId, MAX_DIMENSION, PatchId, SimRng};

use crate::{ActivityView, Patch, WorldError, WorldResult};

/// `free_slot` marker for patches that are not in the free pool.
const NOT_FREE: u32 = u32::MAX;

/// A `dimension × dimension` wrap-around grid of [`Patch`]es.
///
/// The world owns placement and movement.  Entities themselves live
/// elsewhere and are referred to by [`EntityId`].
#[derive(Clone, Debug)]
pub struct World {
    dimension: u32,
    patches:   Vec<Patch>,
    index:     Vec<PatchId>,
    free:      Vec<PatchId>,
    free_slot: Vec<u32>,
}

impl World {
    /// Create an empty world.
    ///
    /// # Errors
    ///
    /// [`WorldError::ZeroDimension`] if `dimension == 0`, or
    /// [`WorldError::DimensionTooLarge`] above [`MAX_DIMENSION`].
    pub fn new(dimension: u32) -> WorldResult<Self> {
        if dimension == 0 {
            return Err(WorldError::ZeroDimension);
        }
        if dimension > MAX_DIMENSION {
            return Err(WorldError::DimensionTooLarge { dimension, max: MAX_DIMENSION });
        }
        let mut patches = Vec::with_capacity(dimension as usize * dimension as usize);
        for y in 0..dimension {
            for x in 0..dimension {
                patches.push(Patch::new(x, y));
            }
        }
        let mut world = Self {
            dimension,
            patches,
            index:     Vec::new(),
            free:      Vec::new(),
            free_slot: Vec::new(),
        };
        world.reset();
        Ok(world)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn dimension(&self) -> u32 {
        self.dimension
    }

    #[inline]
    pub fn patch_count(&self) -> usize {
        self.patches.len()
    }

    #[inline]
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    #[inline]
    pub fn patch(&self, id: PatchId) -> &Patch {
        &self.patches[id.index()]
    }

    /// The id of the patch at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`WorldError::OutOfBounds`] if either coordinate is `>= dimension`.
    pub fn patch_id(&self, x: u32, y: u32) -> WorldResult<PatchId> {
        if x >= self.dimension || y >= self.dimension {
            return Err(WorldError::OutOfBounds { x, y, dimension: self.dimension });
        }
        Ok(PatchId(y * self.dimension + x))
    }

    /// Number of patches with no occupants.
    #[inline]
    pub fn free_patch_count(&self) -> usize {
        self.free.len()
    }

    /// Number of patches with at least one occupant.
    #[inline]
    pub fn occupied_patch_count(&self) -> usize {
        self.patches.len() - self.free.len()
    }

    /// The patch currently hosting `entity`, if it has been placed.
    #[inline]
    pub fn location_of(&self, entity: EntityId) -> Option<PatchId> {
        match self.index.get(entity.index()) {
            Some(&p) if p.is_valid() => Some(p),
            _ => None,
        }
    }

    /// `(x, y)` of the patch hosting `entity`, if it has been placed.
    pub fn coords_of(&self, entity: EntityId) -> Option<(u32, u32)> {
        self.location_of(entity).map(|p| self.patch(p).coords())
    }

    fn require_location(&self, entity: EntityId) -> WorldResult<PatchId> {
        self.location_of(entity).ok_or(WorldError::NotPlaced(entity))
    }

    // ── Placement ─────────────────────────────────────────────────────────

    /// Put every entity of `entities` on its own uniformly chosen empty
    /// patch, drawing one free-pool index per entity in slice order.
    ///
    /// Nothing is placed if any check fails.
    ///
    /// # Errors
    ///
    /// - [`WorldError::Capacity`] if there are fewer free patches than
    ///   entities.
    /// - [`WorldError::AlreadyPlaced`] if an entity is already in the world
    ///   or appears twice in `entities`.
    pub fn place(&mut self, entities: &[EntityId], rng: &mut SimRng) -> WorldResult<()> {
        if entities.len() > self.free.len() {
            return Err(WorldError::Capacity {
                requested: entities.len(),
                available: self.free.len(),
            });
        }
        self.check_unplaced(entities)?;

        for &entity in entities {
            let Some(slot) = rng.pick_index(self.free.len()) else {
                // Unreachable after the capacity check above.
                return Err(WorldError::Capacity { requested: 1, available: 0 });
            };
            let patch = self.free[slot];
            self.insert(entity, patch);
        }
        Ok(())
    }

    /// Put `entity` on the empty patch at `(x, y)`.
    ///
    /// Deterministic counterpart to [`place`](Self::place) for scripted
    /// scenarios.
    ///
    /// # Errors
    ///
    /// [`WorldError::OutOfBounds`], [`WorldError::AlreadyPlaced`], or
    /// [`WorldError::PatchOccupied`] if the patch already hosts anyone.
    pub fn place_at(&mut self, entity: EntityId, x: u32, y: u32) -> WorldResult<()> {
        let patch = self.patch_id(x, y)?;
        self.check_unplaced(&[entity])?;
        if self.patch(patch).is_occupied() {
            return Err(WorldError::PatchOccupied { x, y });
        }
        self.insert(entity, patch);
        Ok(())
    }

    /// Remove every occupant and return every patch to the free pool.
    ///
    /// Meant for starting a fresh run, never for use mid-run.
    pub fn reset(&mut self) {
        for patch in &mut self.patches {
            patch.clear();
        }
        self.index.clear();
        let n = self.patches.len() as u32;
        self.free = (0..n).map(PatchId).collect();
        self.free_slot = (0..n).collect();
    }

    fn check_unplaced(&self, entities: &[EntityId]) -> WorldResult<()> {
        let mut seen: Vec<EntityId> = entities.to_vec();
        seen.sort_unstable();
        for pair in seen.windows(2) {
            if pair[0] == pair[1] {
                return Err(WorldError::AlreadyPlaced(pair[0]));
            }
        }
        match entities.iter().find(|&&e| self.location_of(e).is_some()) {
            Some(&e) => Err(WorldError::AlreadyPlaced(e)),
            None => Ok(()),
        }
    }

    fn insert(&mut self, entity: EntityId, patch: PatchId) {
        if entity.index() >= self.index.len() {
            self.index.resize(entity.index() + 1, PatchId::INVALID);
        }
        if !self.patches[patch.index()].is_occupied() {
            self.take_free(patch);
        }
        self.patches[patch.index()].add(entity);
        self.index[entity.index()] = patch;
    }

    // ── Neighborhood search ───────────────────────────────────────────────

    /// Distinct coordinates within `scope` of `center` on one wrapped axis.
    fn axis_window(&self, center: u32, scope: u32) -> Vec<u32> {
        let dim = self.dimension as i64;
        let span = 2 * scope as i64 + 1;
        if span >= dim {
            return (0..self.dimension).collect();
        }
        let c = center as i64;
        let s = scope as i64;
        (c - s..=c + s).map(|v| v.rem_euclid(dim) as u32).collect()
    }

    /// Every patch within Chebyshev distance `scope` of `origin`, including
    /// `origin` itself, each listed once.
    pub fn patches_around(&self, origin: PatchId, scope: u32) -> Vec<PatchId> {
        let (ox, oy) = self.patch(origin).coords();
        let xs = self.axis_window(ox, scope);
        let ys = self.axis_window(oy, scope);
        let mut out = Vec::with_capacity(xs.len() * ys.len());
        for &y in &ys {
            for &x in &xs {
                out.push(PatchId(y * self.dimension + x));
            }
        }
        out
    }

    /// Every patch within `scope` of `entity`'s patch, its own included.
    ///
    /// # Errors
    ///
    /// [`WorldError::NotPlaced`] if `entity` is not in the world.
    pub fn near_patches(&self, entity: EntityId, scope: u32) -> WorldResult<Vec<PatchId>> {
        let origin = self.require_location(entity)?;
        Ok(self.patches_around(origin, scope))
    }

    /// Every occupant of every patch within `scope` of `entity`.
    ///
    /// The entity's own patch is part of the window, so the result contains
    /// `entity` itself along with anyone sharing its patch.
    ///
    /// # Errors
    ///
    /// [`WorldError::NotPlaced`] if `entity` is not in the world.
    pub fn neighborhood(&self, entity: EntityId, scope: u32) -> WorldResult<Vec<EntityId>> {
        let patches = self.near_patches(entity, scope)?;
        Ok(patches
            .into_iter()
            .flat_map(|p| self.patch(p).occupants().iter().copied())
            .collect())
    }

    // ── Movement ──────────────────────────────────────────────────────────

    /// Move `entity` to a uniformly chosen patch within `scope` that has no
    /// active occupant.
    ///
    /// The entity's own patch is never a candidate while the entity itself
    /// is active.  Returns the new patch, or `None` if every candidate is
    /// taken (the entity stays where it is and no random draw is made).
    ///
    /// # Errors
    ///
    /// [`WorldError::NotPlaced`] if `entity` is not in the world.
    pub fn move_within<V: ActivityView + ?Sized>(
        &mut self,
        entity: EntityId,
        scope:  u32,
        view:   &V,
        rng:    &mut SimRng,
    ) -> WorldResult<Option<PatchId>> {
        let candidates: Vec<PatchId> = self
            .near_patches(entity, scope)?
            .into_iter()
            .filter(|&p| !self.patch(p).has_active_occupant(view))
            .collect();

        match rng.choose(&candidates) {
            None => Ok(None),
            Some(&target) => {
                self.relocate(entity, target);
                Ok(Some(target))
            }
        }
    }

    /// Move `entity` onto whatever patch `target` occupies, regardless of
    /// who else is there.
    ///
    /// # Errors
    ///
    /// [`WorldError::NotPlaced`] if either entity is not in the world.
    pub fn relocate_to(&mut self, entity: EntityId, target: EntityId) -> WorldResult<PatchId> {
        self.require_location(entity)?;
        let destination = self.require_location(target)?;
        self.relocate(entity, destination);
        Ok(destination)
    }

    /// Move a placed entity to `to`, updating occupants, free pool and index
    /// in one step.
    fn relocate(&mut self, entity: EntityId, to: PatchId) {
        let from = self.index[entity.index()];
        if from == to {
            return;
        }

        self.patches[from.index()].remove(entity);
        if !self.patches[from.index()].is_occupied() {
            self.give_free(from);
        }

        if !self.patches[to.index()].is_occupied() {
            self.take_free(to);
        }
        self.patches[to.index()].add(entity);
        self.index[entity.index()] = to;
    }

    // ── Free-pool bookkeeping ─────────────────────────────────────────────

    fn take_free(&mut self, patch: PatchId) {
        let slot = self.free_slot[patch.index()];
        debug_assert_ne!(slot, NOT_FREE, "{patch} is not in the free pool");
        self.free.swap_remove(slot as usize);
        if let Some(&moved) = self.free.get(slot as usize) {
            self.free_slot[moved.index()] = slot;
        }
        self.free_slot[patch.index()] = NOT_FREE;
    }

    fn give_free(&mut self, patch: PatchId) {
        debug_assert_eq!(self.free_slot[patch.index()], NOT_FREE);
        self.free_slot[patch.index()] = self.free.len() as u32;
        self.free.push(patch);
    }

    // ── Invariant audit ───────────────────────────────────────────────────

    /// Check the index, the occupant lists and the free pool against each
    /// other.
    ///
    /// # Errors
    ///
    /// [`WorldError::Invariant`] describing the first inconsistency found.
    pub fn verify(&self) -> WorldResult<()> {
        for (i, &patch) in self.index.iter().enumerate() {
            if !patch.is_valid() {
                continue;
            }
            let entity = EntityId(i as u32);
            let hits = self.patch(patch).occupants().iter().filter(|&&e| e == entity).count();
            if hits != 1 {
                return Err(WorldError::Invariant(format!(
                    "{entity} indexed at {patch} but listed there {hits} times"
                )));
            }
        }

        for (i, patch) in self.patches.iter().enumerate() {
            let id = PatchId(i as u32);
            for &occupant in patch.occupants() {
                if self.location_of(occupant) != Some(id) {
                    return Err(WorldError::Invariant(format!(
                        "{occupant} listed at {id} but indexed at {:?}",
                        self.location_of(occupant)
                    )));
                }
            }

            let slot = self.free_slot[i];
            let pooled = slot != NOT_FREE && self.free.get(slot as usize) == Some(&id);
            if pooled == patch.is_occupied() {
                return Err(WorldError::Invariant(format!(
                    "{id} occupied={} but free-pool membership={pooled}",
                    patch.is_occupied()
                )));
            }
        }

        if self.free.len() != self.patches.iter().filter(|p| !p.is_occupied()).count() {
            return Err(WorldError::Invariant("free pool size mismatch".into()));
        }
        Ok(())
    }
}
