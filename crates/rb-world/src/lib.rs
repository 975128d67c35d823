//! `rb-world`: the spatial engine: a square, wrap-around grid of patches.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`patch`]   | `Patch`: one cell and its occupant list                       |
//! | [`world`]   | `World`: grid, entity index, free-patch pool, search, moves   |
//! | [`view`]    | `ActivityView`: live "is this entity active?" lookups         |
//! | [`error`]   | `WorldError`, `WorldResult<T>`                                |
//!
//! # Invariants
//!
//! After every public `&mut self` call returns:
//!
//! - a patch lists entity `e` iff the entity index maps `e` to that patch;
//! - the free pool holds exactly the patches with no occupants.
//!
//! [`World::verify`] audits both in O(patches + entities).
//!
//! The world stores only [`EntityId`](rb_core::EntityId)s.  Whether an
//! occupant is active is never cached; every occupancy check asks an
//! [`ActivityView`] at the moment of the check.

pub mod error;
pub mod patch;
pub mod view;
pub mod world;

#[cfg(test)]
mod tests;

pub use error::{WorldError, WorldResult};
pub use patch::Patch;
pub use view::ActivityView;
pub use world::World;
