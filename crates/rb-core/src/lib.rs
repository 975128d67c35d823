//! `rb-core`: foundational types for the `rust_rebellion` simulator.
//!
//! This crate is a dependency of every other `rb-*` crate.  It intentionally
//! has no `rb-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `EntityId`, `PatchId`                                     |
//! | [`time`]        | `Tick`                                                    |
//! | [`rng`]         | `SimRng` (the single per-run generator)                   |
//! | [`config`]      | `RebellionConfig`, `PopulationSize`, `LegitimacyMode`     |
//! | [`error`]       | `RbError`, `RbResult`                                     |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (config IO). |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{LegitimacyMode, MAX_DIMENSION, PopulationSize, RebellionConfig};
pub use error::{RbError, RbResult};
pub use ids::{EntityId, PatchId};
pub use rng::SimRng;
pub use time::Tick;
