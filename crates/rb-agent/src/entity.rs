//! Agent and cop state.
//!
//! # Agent lifecycle
//!
//! ```text
//!            act(): grievance > risk + threshold
//!   Quiet  ─────────────────────────────────────▶  Rebelling
//!     ▲   ◀─────────────────────────────────────     │
//!     │                 act(): otherwise             │ arrested
//!     │                                              ▼
//!     └────── jail_term reaches 0 ──────────────  Jailed
//! ```
//!
//! An arrest sets `jail_term` and nothing else.  The `rebel` flag keeps its
//! last value until the agent is free again and re-evaluates, so a freshly
//! arrested agent still reports [`AgentStatus::Rebelling`].  Neighbors never
//! see a jailed agent as a rebel because every rule filters on activity
//! first.

use rb_core::LegitimacyMode;

// ── Legitimacy ────────────────────────────────────────────────────────────────

/// How an agent perceives government legitimacy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Legitimacy {
    /// The configured value, unchanged.
    Fixed(f64),
    /// `base` amplified by the share of jailed agents in vision.
    NeighborhoodWeighted { base: f64 },
}

impl Legitimacy {
    pub fn from_mode(mode: LegitimacyMode, base: f64) -> Self {
        match mode {
            LegitimacyMode::Fixed => Legitimacy::Fixed(base),
            LegitimacyMode::NeighborhoodWeighted => Legitimacy::NeighborhoodWeighted { base },
        }
    }

    /// The configured base value.
    #[inline]
    pub fn base(self) -> f64 {
        match self {
            Legitimacy::Fixed(v) | Legitimacy::NeighborhoodWeighted { base: v } => v,
        }
    }
}

// ── Agent ─────────────────────────────────────────────────────────────────────

/// Immutable per-agent configuration shared by a whole population.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AgentTraits {
    pub vision:     u32,
    pub movement:   bool,
    pub legitimacy: Legitimacy,
}

/// Which summary bucket an agent falls into.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AgentStatus {
    Quiet,
    Jailed,
    Rebelling,
}

/// A member of the population who may rebel.
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    risk_aversion:      f64,
    perceived_hardship: f64,
    jail_term:          u32,
    rebel:              bool,
    traits:             AgentTraits,
}

impl Agent {
    /// A free, quiet agent.
    ///
    /// `risk_aversion` and `perceived_hardship` are fixed for the agent's
    /// lifetime; both are expected in `[0, 1)`.
    pub fn new(traits: AgentTraits, risk_aversion: f64, perceived_hardship: f64) -> Self {
        Self {
            risk_aversion,
            perceived_hardship,
            jail_term: 0,
            rebel: false,
            traits,
        }
    }

    #[inline]
    pub fn risk_aversion(&self) -> f64 {
        self.risk_aversion
    }

    #[inline]
    pub fn perceived_hardship(&self) -> f64 {
        self.perceived_hardship
    }

    #[inline]
    pub fn vision(&self) -> u32 {
        self.traits.vision
    }

    #[inline]
    pub fn can_move(&self) -> bool {
        self.traits.movement
    }

    #[inline]
    pub fn legitimacy(&self) -> Legitimacy {
        self.traits.legitimacy
    }

    /// Free agents are active; jailed agents are not.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.jail_term == 0
    }

    /// Last decision taken by `act()`.
    #[inline]
    pub fn is_rebel(&self) -> bool {
        self.rebel
    }

    #[inline]
    pub fn set_rebel(&mut self, rebel: bool) {
        self.rebel = rebel;
    }

    #[inline]
    pub fn jail_term(&self) -> u32 {
        self.jail_term
    }

    /// Sentence the agent.  Used only by an arrest.
    #[inline]
    pub fn set_jail_term(&mut self, ticks: u32) {
        self.jail_term = ticks;
    }

    /// Serve one tick: `jail_term = max(0, jail_term - 1)`.
    #[inline]
    pub fn decrease_jail_term(&mut self) {
        self.jail_term = self.jail_term.saturating_sub(1);
    }

    /// Summary bucket.  The rebel flag wins over activity.
    pub fn status(&self) -> AgentStatus {
        if self.rebel {
            AgentStatus::Rebelling
        } else if self.is_active() {
            AgentStatus::Quiet
        } else {
            AgentStatus::Jailed
        }
    }
}

// ── Cop ───────────────────────────────────────────────────────────────────────

/// A patrolling cop.  Always active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cop {
    pub vision:        u32,
    /// Longest sentence this cop hands out, inclusive.  At least 1.
    pub max_jail_term: u32,
}

// ── Entity ────────────────────────────────────────────────────────────────────

/// Tag for output and logging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Cop,
    Agent,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::Cop => "cop",
            EntityKind::Agent => "agent",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that occupies a patch.
#[derive(Clone, Debug, PartialEq)]
pub enum Entity {
    Cop(Cop),
    Agent(Agent),
}

impl Entity {
    #[inline]
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Cop(_) => EntityKind::Cop,
            Entity::Agent(_) => EntityKind::Agent,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        match self {
            Entity::Cop(_) => true,
            Entity::Agent(a) => a.is_active(),
        }
    }

    #[inline]
    pub fn is_cop(&self) -> bool {
        matches!(self, Entity::Cop(_))
    }

    #[inline]
    pub fn is_agent(&self) -> bool {
        matches!(self, Entity::Agent(_))
    }

    /// A free agent whose last decision was to rebel: what cops arrest and
    /// what agents count as fellow rebels.
    #[inline]
    pub fn is_active_rebel(&self) -> bool {
        matches!(self, Entity::Agent(a) if a.is_active() && a.is_rebel())
    }

    #[inline]
    pub fn is_jailed_agent(&self) -> bool {
        matches!(self, Entity::Agent(a) if !a.is_active())
    }

    #[inline]
    pub fn vision(&self) -> u32 {
        match self {
            Entity::Cop(c) => c.vision,
            Entity::Agent(a) => a.vision(),
        }
    }

    #[inline]
    pub fn as_agent(&self) -> Option<&Agent> {
        match self {
            Entity::Agent(a) => Some(a),
            Entity::Cop(_) => None,
        }
    }

    #[inline]
    pub fn as_agent_mut(&mut self) -> Option<&mut Agent> {
        match self {
            Entity::Agent(a) => Some(a),
            Entity::Cop(_) => None,
        }
    }

    #[inline]
    pub fn as_cop(&self) -> Option<&Cop> {
        match self {
            Entity::Cop(c) => Some(c),
            Entity::Agent(_) => None,
        }
    }
}
