//! Unit tests for rb-world.

use rb_core::{EntityId, SimRng};

use crate::World;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn ids(n: u32) -> Vec<EntityId> {
    (0..n).map(EntityId).collect()
}

/// Every entity is active.
fn all_active(_: EntityId) -> bool {
    true
}

fn world_with(dimension: u32, placements: &[(u32, u32)]) -> World {
    let mut world = World::new(dimension).unwrap();
    for (i, &(x, y)) in placements.iter().enumerate() {
        world.place_at(EntityId(i as u32), x, y).unwrap();
    }
    world
}

// ── Patch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod patch_tests {
    use std::cell::Cell;

    use super::*;
    use crate::Patch;

    #[test]
    fn add_remove_clear() {
        let mut p = Patch::new(2, 3);
        assert_eq!(p.coords(), (2, 3));
        assert!(!p.is_occupied());

        p.add(EntityId(1));
        p.add(EntityId(2));
        assert!(p.is_occupied());
        assert!(p.contains(EntityId(2)));

        assert_eq!(p.remove(EntityId(1)), Some(EntityId(1)));
        assert_eq!(p.remove(EntityId(1)), None, "absent entity is a no-op");
        assert_eq!(p.occupants(), &[EntityId(2)]);

        p.clear();
        assert!(!p.is_occupied());
    }

    #[test]
    fn active_occupant_is_evaluated_live() {
        let mut p = Patch::new(0, 0);
        p.add(EntityId(0));

        let jailed = Cell::new(true);
        let view = |_: EntityId| !jailed.get();
        assert!(!p.has_active_occupant(&view));

        jailed.set(false);
        assert!(p.has_active_occupant(&view));
        assert_eq!(p.active_occupant_count(&view), 1);
    }
}

// ── Construction & placement ──────────────────────────────────────────────────

#[cfg(test)]
mod placement_tests {
    use super::*;
    use crate::WorldError;

    #[test]
    fn zero_dimension_rejected() {
        assert!(matches!(World::new(0), Err(WorldError::ZeroDimension)));
    }

    #[test]
    fn oversized_dimension_rejected_before_allocating() {
        let too_big = rb_core::MAX_DIMENSION + 1;
        assert!(matches!(
            World::new(too_big),
            Err(WorldError::DimensionTooLarge { dimension, .. }) if dimension == too_big
        ));
    }

    #[test]
    fn new_world_is_all_free() {
        let world = World::new(6).unwrap();
        assert_eq!(world.dimension(), 6);
        assert_eq!(world.patch_count(), 36);
        assert_eq!(world.free_patch_count(), 36);
        world.verify().unwrap();
    }

    #[test]
    fn place_puts_each_entity_on_its_own_patch() {
        let mut world = World::new(10).unwrap();
        let mut rng = SimRng::new(3);
        world.place(&ids(40), &mut rng).unwrap();

        assert_eq!(world.occupied_patch_count(), 40);
        assert_eq!(world.free_patch_count(), 60);
        assert!(world.patches().iter().all(|p| p.occupants().len() <= 1));
        for e in ids(40) {
            let p = world.location_of(e).unwrap();
            assert!(world.patch(p).contains(e));
        }
        world.verify().unwrap();
    }

    #[test]
    fn place_can_fill_the_grid() {
        let mut world = World::new(4).unwrap();
        world.place(&ids(16), &mut SimRng::new(1)).unwrap();
        assert_eq!(world.free_patch_count(), 0);
        world.verify().unwrap();
    }

    #[test]
    fn place_over_capacity_places_nothing() {
        let mut world = World::new(3).unwrap();
        let err = world.place(&ids(10), &mut SimRng::new(0)).unwrap_err();
        assert!(matches!(err, WorldError::Capacity { requested: 10, available: 9 }));
        assert_eq!(world.free_patch_count(), 9);
    }

    #[test]
    fn place_rejects_duplicates_and_replacement() {
        let mut world = World::new(5).unwrap();
        let mut rng = SimRng::new(0);
        let dup = [EntityId(1), EntityId(1)];
        assert!(matches!(world.place(&dup, &mut rng), Err(WorldError::AlreadyPlaced(_))));

        world.place(&[EntityId(1)], &mut rng).unwrap();
        assert!(matches!(
            world.place(&[EntityId(1)], &mut rng),
            Err(WorldError::AlreadyPlaced(EntityId(1)))
        ));
    }

    #[test]
    fn place_at_checks_bounds_and_occupancy() {
        let mut world = World::new(4).unwrap();
        world.place_at(EntityId(0), 1, 2).unwrap();
        assert_eq!(world.coords_of(EntityId(0)), Some((1, 2)));
        assert!(matches!(
            world.place_at(EntityId(1), 1, 2),
            Err(WorldError::PatchOccupied { x: 1, y: 2 })
        ));
        assert!(matches!(world.place_at(EntityId(1), 4, 0), Err(WorldError::OutOfBounds { .. })));
    }

    #[test]
    fn placement_is_deterministic_per_seed() {
        let mut a = World::new(8).unwrap();
        let mut b = World::new(8).unwrap();
        a.place(&ids(20), &mut SimRng::new(99)).unwrap();
        b.place(&ids(20), &mut SimRng::new(99)).unwrap();
        for e in ids(20) {
            assert_eq!(a.location_of(e), b.location_of(e));
        }
    }

    #[test]
    fn reset_restores_free_pool() {
        let mut world = World::new(5).unwrap();
        world.place(&ids(12), &mut SimRng::new(4)).unwrap();
        world.reset();
        assert_eq!(world.free_patch_count(), 25);
        assert_eq!(world.location_of(EntityId(0)), None);
        assert!(world.patches().iter().all(|p| !p.is_occupied()));
        world.verify().unwrap();

        // The same ids can be placed again after a reset.
        world.place(&ids(12), &mut SimRng::new(4)).unwrap();
        world.verify().unwrap();
    }
}

// ── Neighborhood search ───────────────────────────────────────────────────────

#[cfg(test)]
mod neighborhood_tests {
    use std::collections::HashSet;

    use super::*;
    use crate::WorldError;

    #[test]
    fn corner_window_wraps_both_axes() {
        let world = world_with(10, &[(0, 0)]);
        let near = world.near_patches(EntityId(0), 1).unwrap();
        assert_eq!(near.len(), 9);
        for (x, y) in [(9, 9), (0, 9), (9, 0), (1, 1), (0, 0)] {
            assert!(near.contains(&world.patch_id(x, y).unwrap()), "missing ({x}, {y})");
        }
    }

    #[test]
    fn neighbor_across_the_corner_is_seen() {
        let world = world_with(10, &[(0, 0), (9, 9), (5, 5)]);
        let seen = world.neighborhood(EntityId(0), 1).unwrap();
        assert!(seen.contains(&EntityId(1)));
        assert!(!seen.contains(&EntityId(2)));
    }

    #[test]
    fn own_patch_and_cooccupants_included() {
        let mut world = world_with(6, &[(2, 2), (4, 4)]);
        world.relocate_to(EntityId(1), EntityId(0)).unwrap();
        let seen = world.neighborhood(EntityId(0), 1).unwrap();
        assert!(seen.contains(&EntityId(0)));
        assert!(seen.contains(&EntityId(1)));
    }

    #[test]
    fn large_scope_visits_each_patch_once() {
        let world = world_with(4, &[(1, 1)]);
        for scope in [2, 3, 10] {
            let near = world.near_patches(EntityId(0), scope).unwrap();
            let unique: HashSet<_> = near.iter().copied().collect();
            assert_eq!(near.len(), 16, "scope {scope}");
            assert_eq!(unique.len(), 16, "scope {scope}");
        }
    }

    #[test]
    fn odd_dimension_half_scope_no_duplicates() {
        // 2*2+1 = 5 == dimension: the window touches every column exactly once.
        let world = world_with(5, &[(0, 4)]);
        let near = world.near_patches(EntityId(0), 2).unwrap();
        let unique: HashSet<_> = near.iter().copied().collect();
        assert_eq!(near.len(), 25);
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn unplaced_entity_errors() {
        let world = World::new(3).unwrap();
        assert!(matches!(
            world.neighborhood(EntityId(5), 1),
            Err(WorldError::NotPlaced(EntityId(5)))
        ));
    }
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod movement_tests {
    use super::*;

    #[test]
    fn moves_to_a_patch_without_active_occupant() {
        let mut world = world_with(5, &[(2, 2), (1, 1)]);
        let mut rng = SimRng::new(11);
        for _ in 0..50 {
            let before = world.location_of(EntityId(0)).unwrap();
            let after = world.move_within(EntityId(0), 1, &all_active, &mut rng).unwrap().unwrap();
            assert_ne!(before, after, "own patch holds the mover itself");
            assert_eq!(world.patch(after).occupants(), &[EntityId(0)]);
            world.verify().unwrap();
        }
    }

    #[test]
    fn stays_put_when_nothing_is_free() {
        // 1x1 world: the only candidate is the mover's own patch.
        let mut world = world_with(1, &[(0, 0)]);
        let moved = world.move_within(EntityId(0), 1, &all_active, &mut SimRng::new(0)).unwrap();
        assert_eq!(moved, None);
        assert_eq!(world.coords_of(EntityId(0)), Some((0, 0)));
    }

    #[test]
    fn only_free_candidate_is_chosen() {
        // 3x3 grid fully occupied except (2, 2).
        let mut spots = Vec::new();
        for y in 0..3 {
            for x in 0..3 {
                if (x, y) != (2, 2) {
                    spots.push((x, y));
                }
            }
        }
        let mut world = world_with(3, &spots);
        let moved = world.move_within(EntityId(0), 1, &all_active, &mut SimRng::new(5)).unwrap();
        assert_eq!(moved, Some(world.patch_id(2, 2).unwrap()));
        assert_eq!(world.free_patch_count(), 1);
        assert_eq!(world.coords_of(EntityId(0)), Some((2, 2)));
        world.verify().unwrap();
    }

    #[test]
    fn may_share_a_patch_with_inactive_occupants() {
        // Full 2x2 grid: only entity 1 (inactive) leaves its patch open.
        let mut world = World::new(2).unwrap();
        world.place_at(EntityId(0), 0, 0).unwrap();
        world.place_at(EntityId(1), 1, 0).unwrap();
        world.place_at(EntityId(2), 0, 1).unwrap();
        world.place_at(EntityId(3), 1, 1).unwrap();
        let view = |e: EntityId| e != EntityId(1);
        let moved = world.move_within(EntityId(0), 1, &view, &mut SimRng::new(2)).unwrap();
        assert_eq!(moved, Some(world.patch_id(1, 0).unwrap()));
        assert_eq!(world.patch(moved.unwrap()).active_occupant_count(&view), 1);
        world.verify().unwrap();
    }

    #[test]
    fn relocate_to_ignores_occupancy() {
        let mut world = world_with(4, &[(0, 0), (3, 3)]);
        let free_before = world.free_patch_count();
        let dest = world.relocate_to(EntityId(0), EntityId(1)).unwrap();
        assert_eq!(world.coords_of(EntityId(0)), Some((3, 3)));
        assert_eq!(world.patch(dest).occupants(), &[EntityId(1), EntityId(0)]);
        // (0, 0) was vacated and (3, 3) was already occupied.
        assert_eq!(world.free_patch_count(), free_before + 1);
        world.verify().unwrap();

        // Leaving a shared patch does not free it.
        world.move_within(EntityId(0), 1, &all_active, &mut SimRng::new(0)).unwrap();
        assert!(world.patch(dest).is_occupied());
        world.verify().unwrap();
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;

    use super::*;

    proptest! {
        #[test]
        fn bookkeeping_survives_random_moves(
            dimension in 1u32..12,
            fill      in 0.0f64..1.0,
            scope     in 1u32..6,
            seed      in any::<u64>(),
            steps     in 0usize..60,
        ) {
            let patches = (dimension * dimension) as usize;
            let count = ((patches as f64) * fill) as u32;
            let mut world = World::new(dimension).unwrap();
            let mut rng = SimRng::new(seed);
            world.place(&ids(count), &mut rng).unwrap();

            prop_assert_eq!(world.occupied_patch_count(), count as usize);
            prop_assert!(world.verify().is_ok());

            for step in 0..steps {
                if count == 0 {
                    break;
                }
                let mover = EntityId((step as u32) % count);
                world.move_within(mover, scope, &all_active, &mut rng).unwrap();
                prop_assert!(world.verify().is_ok());
                prop_assert!(world.patches().iter().all(|p| p.active_occupant_count(&all_active) <= 1));
            }
        }
    }
}
