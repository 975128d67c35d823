//! Per-tick status counts.

use std::fmt;

use rb_agent::Population;
use rb_core::Tick;

/// How many agents were quiet, jailed and rebelling at the end of `tick`.
///
/// Every agent falls in exactly one bucket, so the three counts always sum
/// to the agent population.  An agent whose rebel flag is set counts as
/// rebelling even while jailed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TickSummary {
    pub tick:      Tick,
    pub quiet:     usize,
    pub jailed:    usize,
    pub rebelling: usize,
}

impl TickSummary {
    /// Count `population` as it stands now.
    pub fn capture(tick: Tick, population: &Population) -> Self {
        let (quiet, jailed, rebelling) = population.status_counts();
        Self { tick, quiet, jailed, rebelling }
    }

    #[inline]
    pub fn total(&self) -> usize {
        self.quiet + self.jailed + self.rebelling
    }
}

impl fmt::Display for TickSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: quiet={} jailed={} rebelling={}",
            self.tick, self.quiet, self.jailed, self.rebelling
        )
    }
}
