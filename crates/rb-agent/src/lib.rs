//! `rb-agent`: entity state and population storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                     |
//! |---------------|--------------------------------------------------------------|
//! | [`entity`]    | `Agent`, `Cop`, `Entity`, `AgentStatus`, `Legitimacy`        |
//! | [`store`]     | `Population`: dense `EntityId`-indexed storage               |
//! | [`builder`]   | `PopulationBuilder`: draws agent traits from a `SimRng`      |
//!
//! Entities carry state only.  The decision rules that read and change that
//! state live in `rb-behavior`; placement and movement live in `rb-world`.

pub mod builder;
pub mod entity;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::PopulationBuilder;
pub use entity::{Agent, AgentStatus, AgentTraits, Cop, Entity, EntityKind, Legitimacy};
pub use store::Population;
