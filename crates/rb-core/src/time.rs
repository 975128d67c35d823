//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter.  Tick 0 is the state
//! right after setup; tick `n` is the state after the `n`-th call to
//! `Sim::tick`.  There is no wall-clock mapping.

use std::fmt;

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The following tick.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }

    /// `true` if this tick falls on an output boundary of `interval` ticks.
    ///
    /// An interval of 0 disables output entirely.
    #[inline]
    pub fn is_output_tick(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
