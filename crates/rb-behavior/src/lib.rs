//! `rb-behavior`: entity decision rules, intent types and the read-only
//! context they run against.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | [`intent`]  | `Intent` enum (`MoveWithin`, `SetRebel`, `Arrest`)              |
//! | [`context`] | `SimContext<'a>`: read-only view of world and population        |
//! | [`model`]   | `BehaviorModel` trait                                           |
//! | [`rules`]   | `RebellionRules` and the pure formulas behind it                |
//! | [`noop`]    | `NoopBehavior`: placeholder that never produces intents         |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                            |
//!
//! # Design notes
//!
//! For each entity, rb-sim runs two short plan/apply rounds:
//!
//! 1. `BehaviorModel::plan_move` reads `&SimContext` and returns intents;
//!    rb-sim applies them at once.
//! 2. `BehaviorModel::plan_act` reads a fresh `&SimContext` (now reflecting
//!    the move) and returns intents; rb-sim applies them at once.
//!
//! Models never mutate the world or the population themselves, so the
//! trait only needs `Send + Sync`.

pub mod context;
pub mod error;
pub mod intent;
pub mod model;
pub mod noop;
pub mod rules;


pub use context::SimContext;
pub use error::{BehaviorError, BehaviorResult};
pub use intent::Intent;
pub use model::BehaviorModel;
pub use noop::NoopBehavior;
pub use rules::{NeighborhoodCounts, RebellionRules};
