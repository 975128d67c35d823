//! The civil-violence decision rules.
//!
//! # Agents
//!
//! A free agent looks at every occupant within `vision` (its own patch and
//! itself included) and computes
//!
//! ```text
//! ratio       = floor(cops / (1 + active_rebels))
//! p_arrest    = 1 - 2^(-k * ratio)
//! net_risk    = risk_aversion * p_arrest
//! grievance   = perceived_hardship * (1 - legitimacy)
//! rebel       = grievance > net_risk + threshold
//! ```
//!
//! In neighborhood-weighted mode `legitimacy = (1 + jailed / agents) * base`
//! over the agents in vision, where `jailed / agents` is integer division
//! and the increase is taken as 0 when no agents are in vision.
//!
//! # Cops
//!
//! A cop picks one active rebel within `vision` uniformly at random,
//! sentences it to a term drawn from `1..=max_jail_term` and steps onto its
//! patch.

use rb_agent::{Agent, Entity, Legitimacy, Population};
use rb_core::{EntityId, RebellionConfig, SimRng};

use crate::{BehaviorModel, BehaviorResult, Intent, SimContext};

// ── Formulas ──────────────────────────────────────────────────────────────────

/// `floor(cops_nearby / active_rebels_nearby)`.
///
/// `active_rebels_nearby` already carries the `+1` floor, see
/// [`NeighborhoodCounts::active_rebels_nearby`].  A zero is treated as 1.
#[inline]
pub fn cop_rebel_ratio(cops_nearby: usize, active_rebels_nearby: usize) -> u32 {
    (cops_nearby / active_rebels_nearby.max(1)) as u32
}

/// `1 - 2^(-k * ratio)`.
#[inline]
pub fn arrest_probability(k: f64, ratio: u32) -> f64 {
    1.0 - 2f64.powf(-k * ratio as f64)
}

#[inline]
pub fn net_risk(risk_aversion: f64, arrest_probability: f64) -> f64 {
    risk_aversion * arrest_probability
}

#[inline]
pub fn grievance(perceived_hardship: f64, legitimacy: f64) -> f64 {
    perceived_hardship * (1.0 - legitimacy)
}

/// `(1 + floor(jailed / total)) * base`, or `base` when `total == 0`.
///
/// The share is an integer quotient: it is 1 only when every visible agent
/// is jailed, and 0 otherwise.
pub fn weighted_legitimacy(base: f64, jailed_agents: usize, total_agents: usize) -> f64 {
    let increase = jailed_agents.checked_div(total_agents).unwrap_or(0);
    (1.0 + increase as f64) * base
}

// ── Neighborhood tally ────────────────────────────────────────────────────────

/// What an entity sees within its vision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NeighborhoodCounts {
    pub cops:          usize,
    /// Free agents whose last decision was to rebel.
    pub active_rebels: usize,
    /// All agents, free or jailed.
    pub agents:        usize,
    pub jailed_agents: usize,
}

impl NeighborhoodCounts {
    /// Tally `neighbors`.  Ids missing from `population` are ignored.
    pub fn tally(neighbors: &[EntityId], population: &Population) -> Self {
        let mut counts = Self::default();
        for entity in neighbors.iter().filter_map(|&id| population.get(id)) {
            match entity {
                Entity::Cop(_) => counts.cops += 1,
                Entity::Agent(a) => {
                    counts.agents += 1;
                    if !a.is_active() {
                        counts.jailed_agents += 1;
                    } else if a.is_rebel() {
                        counts.active_rebels += 1;
                    }
                }
            }
        }
        counts
    }

    /// Visible active rebels plus one.  Never zero.
    #[inline]
    pub fn active_rebels_nearby(&self) -> usize {
        1 + self.active_rebels
    }
}

// ── RebellionRules ────────────────────────────────────────────────────────────

/// The standard agent and cop rules, parameterized by the arrest threshold
/// and the risk-sensitivity constant `k`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RebellionRules {
    pub threshold: f64,
    pub k:         f64,
}

impl Default for RebellionRules {
    fn default() -> Self {
        Self { threshold: 0.1, k: 2.3 }
    }
}

impl RebellionRules {
    pub fn new(threshold: f64, k: f64) -> Self {
        Self { threshold, k }
    }

    pub fn from_config(config: &RebellionConfig) -> Self {
        Self::new(config.threshold, config.k)
    }

    /// The legitimacy `agent` perceives given what it sees.
    pub fn perceived_legitimacy(&self, agent: &Agent, counts: &NeighborhoodCounts) -> f64 {
        match agent.legitimacy() {
            Legitimacy::Fixed(value) => value,
            Legitimacy::NeighborhoodWeighted { base } => {
                weighted_legitimacy(base, counts.jailed_agents, counts.agents)
            }
        }
    }

    /// Whether `agent` rebels given what it sees.
    pub fn decide(&self, agent: &Agent, counts: &NeighborhoodCounts) -> bool {
        let ratio = cop_rebel_ratio(counts.cops, counts.active_rebels_nearby());
        let risk = net_risk(agent.risk_aversion(), arrest_probability(self.k, ratio));
        let legitimacy = self.perceived_legitimacy(agent, counts);
        grievance(agent.perceived_hardship(), legitimacy) > risk + self.threshold
    }

    fn agent_act(
        &self,
        entity: EntityId,
        agent:  &Agent,
        ctx:    &SimContext<'_>,
    ) -> BehaviorResult<Vec<Intent>> {
        if !agent.is_active() {
            return Ok(vec![]);
        }
        let neighbors = ctx.world.neighborhood(entity, agent.vision())?;
        let counts = NeighborhoodCounts::tally(&neighbors, ctx.population);
        Ok(vec![Intent::SetRebel(self.decide(agent, &counts))])
    }

    fn cop_act(
        &self,
        entity:        EntityId,
        vision:        u32,
        max_jail_term: u32,
        ctx:           &SimContext<'_>,
        rng:           &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        let suspects: Vec<EntityId> = ctx
            .world
            .neighborhood(entity, vision)?
            .into_iter()
            .filter(|&id| ctx.population.get(id).is_some_and(Entity::is_active_rebel))
            .collect();

        let Some(&suspect) = rng.choose(&suspects) else {
            return Ok(vec![]);
        };
        let jail_term = rng.gen_range(1..=max_jail_term.max(1));
        Ok(vec![Intent::Arrest { suspect, jail_term }])
    }
}

impl BehaviorModel for RebellionRules {
    /// Cops always patrol; agents move only while free and allowed to.
    fn plan_move(&self, entity: EntityId, ctx: &SimContext<'_>) -> BehaviorResult<Vec<Intent>> {
        let subject = ctx.population.entity(entity)?;
        let moves = match subject {
            Entity::Cop(_) => true,
            Entity::Agent(agent) => agent.is_active() && agent.can_move(),
        };
        Ok(if moves { vec![Intent::MoveWithin { scope: subject.vision() }] } else { vec![] })
    }

    fn plan_act(
        &self,
        entity: EntityId,
        ctx:    &SimContext<'_>,
        rng:    &mut SimRng,
    ) -> BehaviorResult<Vec<Intent>> {
        match ctx.population.entity(entity)? {
            Entity::Cop(cop) => self.cop_act(entity, cop.vision, cop.max_jail_term, ctx, rng),
            Entity::Agent(agent) => self.agent_act(entity, agent, ctx),
        }
    }
}
