//! Run configuration.
//!
//! A [`RebellionConfig`] is built once (by the application, typically from a
//! JSON file plus command-line overrides), validated, and then passed by
//! reference to the simulation builder.  Behavior rules never read ambient
//! state; every parameter they need is copied out of this value at setup.

use crate::{RbError, RbResult};

// ── PopulationSize ────────────────────────────────────────────────────────────

/// How many entities of one kind to create.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PopulationSize {
    /// Fraction of all patches, resolved as `floor(density * dimension²)`.
    Density(f64),
    /// An absolute head count.
    Count(u32),
}

impl PopulationSize {
    /// Resolve to a head count on a `dimension × dimension` grid.
    pub fn resolve(self, dimension: u32) -> usize {
        let patches = dimension as usize * dimension as usize;
        match self {
            PopulationSize::Density(d) => (d * patches as f64).floor() as usize,
            PopulationSize::Count(n) => n as usize,
        }
    }

    fn validate(self, what: &str) -> RbResult<()> {
        match self {
            PopulationSize::Density(d) if !d.is_finite() || d <= 0.0 || d > 1.0 => Err(
                RbError::Config(format!("{what} density must lie in (0, 1], got {d}")),
            ),
            _ => Ok(()),
        }
    }
}

// ── LegitimacyMode ────────────────────────────────────────────────────────────

/// How an agent perceives government legitimacy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LegitimacyMode {
    /// Every agent sees `government_legitimacy` unchanged.
    #[default]
    Fixed,
    /// `government_legitimacy` is amplified by the share of jailed agents in
    /// the agent's vision.
    NeighborhoodWeighted,
}

impl LegitimacyMode {
    /// Stable name used in output files.
    pub fn as_str(self) -> &'static str {
        match self {
            LegitimacyMode::Fixed => "fixed",
            LegitimacyMode::NeighborhoodWeighted => "neighborhood_weighted",
        }
    }
}

/// Largest supported grid side.  Every `PatchId` of a grid this size fits
/// in a `u32` below `PatchId::INVALID`.
pub const MAX_DIMENSION: u32 = u16::MAX as u32;

// ── RebellionConfig ───────────────────────────────────────────────────────────

/// Top-level simulation configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RebellionConfig {
    /// Side length of the square toroidal grid.
    pub dimension: u32,

    /// Number (or density) of cops.
    pub cops: PopulationSize,

    /// Number (or density) of agents.
    pub agents: PopulationSize,

    /// Chebyshev radius of every entity's neighborhood.
    pub vision: u32,

    /// Upper bound (inclusive) of an arrest sentence in ticks.
    pub max_jail_term: u32,

    /// Whether agents move.  Cops always patrol.
    pub movement: bool,

    pub legitimacy_mode: LegitimacyMode,

    /// Base government legitimacy in `[0, 1]`.
    pub government_legitimacy: f64,

    /// Margin by which grievance must exceed net risk for an agent to rebel.
    pub threshold: f64,

    /// Risk-sensitivity constant `K` of the arrest-probability estimate.
    pub k: f64,

    /// Ticks executed by `Sim::run` after the tick-0 summary.
    pub total_ticks: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Emit an entity snapshot every N ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for RebellionConfig {
    fn default() -> Self {
        Self {
            dimension:             40,
            cops:                  PopulationSize::Density(0.04),
            agents:                PopulationSize::Density(0.70),
            vision:                7,
            max_jail_term:         30,
            movement:              true,
            legitimacy_mode:       LegitimacyMode::Fixed,
            government_legitimacy: 0.82,
            threshold:             0.1,
            k:                     2.3,
            total_ticks:           200,
            seed:                  42,
            output_interval_ticks: 0,
        }
    }
}

impl RebellionConfig {
    /// Total number of patches on the grid.
    #[inline]
    pub fn patch_count(&self) -> usize {
        self.dimension as usize * self.dimension as usize
    }

    #[inline]
    pub fn cop_count(&self) -> usize {
        self.cops.resolve(self.dimension)
    }

    #[inline]
    pub fn agent_count(&self) -> usize {
        self.agents.resolve(self.dimension)
    }

    /// The tick at which `Sim::run` stops.
    #[inline]
    pub fn end_tick(&self) -> crate::Tick {
        crate::Tick(self.total_ticks)
    }

    /// Check every parameter before any entity is created.
    ///
    /// # Errors
    ///
    /// [`RbError::Config`] naming the first offending parameter.
    pub fn validate(&self) -> RbResult<()> {
        if self.dimension == 0 {
            return Err(RbError::Config("dimension must be positive".into()));
        }
        if self.dimension > MAX_DIMENSION {
            return Err(RbError::Config(format!(
                "dimension must be at most {MAX_DIMENSION}, got {}",
                self.dimension
            )));
        }
        if self.vision == 0 {
            return Err(RbError::Config("vision must be positive".into()));
        }
        if self.max_jail_term == 0 {
            return Err(RbError::Config("max_jail_term must be at least 1".into()));
        }
        self.cops.validate("cop")?;
        self.agents.validate("agent")?;
        if !(0.0..=1.0).contains(&self.government_legitimacy) {
            return Err(RbError::Config(format!(
                "government_legitimacy must lie in [0, 1], got {}",
                self.government_legitimacy
            )));
        }
        if !self.threshold.is_finite() {
            return Err(RbError::Config("threshold must be finite".into()));
        }
        if !self.k.is_finite() || self.k < 0.0 {
            return Err(RbError::Config(format!("k must be finite and >= 0, got {}", self.k)));
        }

        let population = self.cop_count() + self.agent_count();
        if population > self.patch_count() {
            return Err(RbError::Config(format!(
                "population of {population} ({} cops + {} agents) exceeds the {} patches of a {d}x{d} grid",
                self.cop_count(),
                self.agent_count(),
                self.patch_count(),
                d = self.dimension,
            )));
        }
        Ok(())
    }
}
