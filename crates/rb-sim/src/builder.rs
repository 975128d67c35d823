//! Fluent builder for constructing a [`Sim`].

use tracing::info;

use rb_agent::{Population, PopulationBuilder};
use rb_behavior::BehaviorModel;
use rb_core::{EntityId, RebellionConfig, SimRng, Tick};
use rb_world::World;

use crate::{Sim, SimError, SimResult, TickSummary};

/// Fluent builder for [`Sim<B>`].
///
/// # Required inputs
///
/// - [`RebellionConfig`]: grid size, population, rule constants, seed, …
/// - `B: BehaviorModel`: the decision rules (normally
///   [`rb_behavior::RebellionRules`])
///
/// # Optional inputs (have defaults)
///
/// | Method                   | Default                                         |
/// |--------------------------|-------------------------------------------------|
/// | `.population(p)`         | `PopulationBuilder::from_config(&config)`       |
/// | `.initial_positions(v)`  | Uniform random distinct free patches            |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config, RebellionRules::from_config(&config))
///     .initial_positions(vec![(0, 0), (2, 3)])
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<B: BehaviorModel> {
    config:     RebellionConfig,
    population: Option<Population>,
    positions:  Option<Vec<(u32, u32)>>,
    behavior:   B,
}

impl<B: BehaviorModel> SimBuilder<B> {
    /// Create a builder with all required inputs.
    pub fn new(config: RebellionConfig, behavior: B) -> Self {
        Self { config, population: None, positions: None, behavior }
    }

    /// Supply the entities instead of drawing them from the config.
    ///
    /// No trait draws are made in that case, so the first random draw of the
    /// run is the placement.
    pub fn population(mut self, population: Population) -> Self {
        self.population = Some(population);
        self
    }

    /// Supply the starting `(x, y)` of every entity, in id order.
    ///
    /// Must be length `population.len()` and name distinct patches.  No
    /// free-pool draw is made.
    pub fn initial_positions(mut self, positions: Vec<(u32, u32)>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate the configuration, create and place the population, record
    /// the tick-0 summary and return a ready-to-run [`Sim`].
    ///
    /// # Errors
    ///
    /// - [`SimError::Core`] for an invalid configuration.
    /// - [`SimError::World`] when the population does not fit the grid or a
    ///   position lies outside it.
    /// - [`SimError::PositionCountMismatch`] for a wrong-length position list.
    pub fn build(self) -> SimResult<Sim<B>> {
        self.config.validate()?;

        let mut rng = SimRng::new(self.config.seed);
        let population = match self.population {
            Some(p) => p,
            None => PopulationBuilder::from_config(&self.config).build(&mut rng),
        };

        let mut world = World::new(self.config.dimension)?;
        match self.positions {
            Some(positions) => {
                if positions.len() != population.len() {
                    return Err(SimError::PositionCountMismatch {
                        expected: population.len(),
                        got:      positions.len(),
                    });
                }
                for (i, (x, y)) in positions.into_iter().enumerate() {
                    world.place_at(EntityId(i as u32), x, y)?;
                }
            }
            None => {
                let ids: Vec<EntityId> = population.ids().collect();
                world.place(&ids, &mut rng)?;
            }
        }

        info!(
            dimension = self.config.dimension,
            cops      = population.cop_count(),
            agents    = population.agent_count(),
            seed      = self.config.seed,
            "simulation ready"
        );

        let history = vec![TickSummary::capture(Tick::ZERO, &population)];
        Ok(Sim {
            clock: Tick::ZERO,
            config: self.config,
            population,
            world,
            rng,
            behavior: self.behavior,
            history,
        })
    }
}
