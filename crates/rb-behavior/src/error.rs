use thiserror::Error;

use rb_core::RbError;
use rb_world::WorldError;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("world query failed: {0}")]
    World(#[from] WorldError),

    #[error(transparent)]
    Core(#[from] RbError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
