//! Spatial-subsystem error type.

use thiserror::Error;

use rb_core::EntityId;

/// Errors produced by `rb-world`.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("a world needs a positive dimension")]
    ZeroDimension,

    #[error("dimension {dimension} exceeds the largest supported grid side {max}")]
    DimensionTooLarge { dimension: u32, max: u32 },

    #[error("cannot place {requested} entities: only {available} free patches")]
    Capacity { requested: usize, available: usize },

    #[error("entity {0} has not been placed in the world")]
    NotPlaced(EntityId),

    #[error("entity {0} is already placed in the world")]
    AlreadyPlaced(EntityId),

    #[error("coordinate ({x}, {y}) lies outside a {dimension}x{dimension} world")]
    OutOfBounds { x: u32, y: u32, dimension: u32 },

    #[error("patch ({x}, {y}) is already occupied")]
    PatchOccupied { x: u32, y: u32 },

    #[error("world invariant violated: {0}")]
    Invariant(String),
}

pub type WorldResult<T> = Result<T, WorldError>;
