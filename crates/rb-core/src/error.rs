//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RbError` as one variant
//! via `#[from]`, so configuration failures surface unchanged at the top.

use thiserror::Error;

use crate::EntityId;

/// The top-level error type for `rb-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RbError {
    #[error("entity {0} not found")]
    EntityNotFound(EntityId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `rb-*` crates.
pub type RbResult<T> = Result<T, RbError>;
