//! Construct a [`Population`] from a run configuration.
//!
//! # Usage
//!
//! ```rust
//! use rb_agent::PopulationBuilder;
//! use rb_core::{RebellionConfig, SimRng};
//!
//! let config = RebellionConfig { dimension: 10, ..Default::default() };
//! let mut rng = SimRng::new(config.seed);
//! let population = PopulationBuilder::from_config(&config).build(&mut rng);
//!
//! assert_eq!(population.cop_count(), 4);    // floor(0.04 * 100)
//! assert_eq!(population.agent_count(), 70); // floor(0.70 * 100)
//! ```

use rb_core::{RebellionConfig, SimRng};

use crate::{Agent, AgentTraits, Cop, Entity, Legitimacy, Population};

/// Fluent builder for [`Population`].
///
/// Cops receive ids `0..cops`, agents `cops..cops + agents`.
pub struct PopulationBuilder {
    cops:   usize,
    agents: usize,
    cop:    Cop,
    traits: AgentTraits,
}

impl PopulationBuilder {
    /// A builder for `cops` cops and `agents` agents with vision 1, a
    /// one-tick maximum sentence, movement on and fixed legitimacy 0.
    pub fn new(cops: usize, agents: usize) -> Self {
        Self {
            cops,
            agents,
            cop:    Cop { vision: 1, max_jail_term: 1 },
            traits: AgentTraits {
                vision:     1,
                movement:   true,
                legitimacy: Legitimacy::Fixed(0.0),
            },
        }
    }

    /// Counts, vision, sentence bound, movement and legitimacy taken from
    /// `config`.  `config` is assumed to be validated.
    pub fn from_config(config: &RebellionConfig) -> Self {
        Self::new(config.cop_count(), config.agent_count())
            .cop(Cop { vision: config.vision, max_jail_term: config.max_jail_term })
            .agent_traits(AgentTraits {
                vision:     config.vision,
                movement:   config.movement,
                legitimacy: Legitimacy::from_mode(
                    config.legitimacy_mode,
                    config.government_legitimacy,
                ),
            })
    }

    /// Template copied into every cop.
    pub fn cop(mut self, cop: Cop) -> Self {
        self.cop = cop;
        self
    }

    /// Traits shared by every agent.
    pub fn agent_traits(mut self, traits: AgentTraits) -> Self {
        self.traits = traits;
        self
    }

    /// Create the entities, drawing each agent's risk aversion and then its
    /// perceived hardship from `rng`, in agent order.  Cops draw nothing.
    pub fn build(self, rng: &mut SimRng) -> Population {
        let mut entities = Vec::with_capacity(self.cops + self.agents);
        entities.extend((0..self.cops).map(|_| Entity::Cop(self.cop)));
        for _ in 0..self.agents {
            let risk_aversion: f64 = rng.random();
            let perceived_hardship: f64 = rng.random();
            entities.push(Entity::Agent(Agent::new(self.traits, risk_aversion, perceived_hardship)));
        }
        Population::new(entities)
    }
}
