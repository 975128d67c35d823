use thiserror::Error;

use rb_behavior::BehaviorError;
use rb_core::RbError;
use rb_world::WorldError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] RbError),

    #[error("world error: {0}")]
    World(#[from] WorldError),

    #[error("behavior error: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("initial positions length {got} does not match entity count {expected}")]
    PositionCountMismatch {
        expected: usize,
        got:      usize,
    },
}

pub type SimResult<T> = Result<T, SimError>;
