//! Plain data row types written by output backends.

use rb_core::RebellionConfig;
use rb_sim::TickSummary;

/// The parameters a run was started with.  Written once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunParametersRow {
    pub seed:                  u64,
    pub total_ticks:           u64,
    pub dimension:             u32,
    pub vision:                u32,
    pub max_jail_term:         u32,
    pub movement:              bool,
    /// Resolved cop count.
    pub cops:                  u64,
    /// Resolved agent count.
    pub agents:                u64,
    /// `cops / dimension²`.
    pub cop_density:           f64,
    /// `agents / dimension²`.
    pub agent_density:         f64,
    pub government_legitimacy: f64,
    /// `"fixed"` or `"neighborhood_weighted"`.
    pub legitimacy_mode:       &'static str,
    pub threshold:             f64,
    pub k:                     f64,
}

impl RunParametersRow {
    pub fn from_config(config: &RebellionConfig) -> Self {
        let patches = config.patch_count().max(1) as f64;
        Self {
            seed:                  config.seed,
            total_ticks:           config.total_ticks,
            dimension:             config.dimension,
            vision:                config.vision,
            max_jail_term:         config.max_jail_term,
            movement:              config.movement,
            cops:                  config.cop_count() as u64,
            agents:                config.agent_count() as u64,
            cop_density:           config.cop_count() as f64 / patches,
            agent_density:         config.agent_count() as f64 / patches,
            government_legitimacy: config.government_legitimacy,
            legitimacy_mode:       config.legitimacy_mode.as_str(),
            threshold:             config.threshold,
            k:                     config.k,
        }
    }
}

/// Agent status counts at the end of one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:      u64,
    pub quiet:     u64,
    pub jailed:    u64,
    pub rebelling: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(summary: &TickSummary) -> Self {
        Self {
            tick:      summary.tick.0,
            quiet:     summary.quiet as u64,
            jailed:    summary.jailed as u64,
            rebelling: summary.rebelling as u64,
        }
    }
}

/// One entity's position and state at a given tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySnapshotRow {
    pub entity_id: u32,
    pub tick:      u64,
    /// `"cop"` or `"agent"`.
    pub kind:      &'static str,
    pub x:         u32,
    pub y:         u32,
    pub active:    bool,
    /// Always `false` for cops.
    pub rebel:     bool,
    /// Always 0 for cops.
    pub jail_term: u32,
}
