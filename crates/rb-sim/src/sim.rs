//! The `Sim` struct and its tick loop.

use tracing::{debug, info, trace};

use rb_agent::{Population, PopulationBuilder};
use rb_behavior::{BehaviorModel, Intent, SimContext};
use rb_core::{EntityId, RebellionConfig, SimRng, Tick};
use rb_world::World;

use crate::{SimObserver, SimResult, TickSummary};

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim<B>` holds all state of one run and drives the tick loop:
///
/// 1. **Order**: draw a uniformly random permutation of every entity id.
/// 2. **Entities** (sequential, in that order): call
///    [`BehaviorModel::plan_move`] and apply its intents, then
///    [`BehaviorModel::plan_act`] and apply its intents.
///    - `MoveWithin{scope}`      → `World::move_within`.
///    - `SetRebel(b)`            → set the agent's rebel flag.
///    - `Arrest{suspect, term}`  → sentence the suspect, move the cop onto
///      the suspect's patch.
/// 3. **Jail**: every agent serves one tick.
/// 4. **Summary**: count the agents per status and append to the history.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<B: BehaviorModel> {
    /// Parameters of the run.
    pub config: RebellionConfig,

    /// Last completed tick.  `Tick::ZERO` right after setup.
    pub clock: Tick,

    /// Every cop and agent, indexed by `EntityId`.
    pub population: Population,

    /// The grid.  Mutated only through intents applied by the sim.
    pub world: World,

    /// The run's only source of randomness.
    pub(crate) rng: SimRng,

    /// The decision rules.  Called twice per entity per tick.
    pub behavior: B,

    /// One summary per completed tick, starting with tick 0.
    pub(crate) history: Vec<TickSummary>,
}

impl<B: BehaviorModel> Sim<B> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current tick to `config.end_tick()`.
    ///
    /// When called on a fresh run the observer first receives the tick-0
    /// summary (and snapshot, if enabled).  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        if self.clock == Tick::ZERO {
            self.report_setup(observer);
        }
        while self.clock < self.config.end_tick() {
            self.step(observer)?;
        }
        info!(
            final_tick = self.clock.0,
            rebelling  = self.summary().rebelling,
            jailed     = self.summary().jailed,
            "simulation finished"
        );
        observer.on_sim_end(self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Execute one tick without observer callbacks and return its summary.
    pub fn tick(&mut self) -> SimResult<TickSummary> {
        let now = self.clock.next();

        let mut order: Vec<EntityId> = self.population.ids().collect();
        self.rng.shuffle(&mut order);
        for &entity in &order {
            self.process_entity(entity, now)?;
        }

        for agent in self.population.agents_mut() {
            agent.decrease_jail_term();
        }

        debug_assert!(
            self.world.verify().is_ok(),
            "world bookkeeping broken after {now}: {:?}",
            self.world.verify()
        );

        let summary = TickSummary::capture(now, &self.population);
        debug!(
            tick      = now.0,
            quiet     = summary.quiet,
            jailed    = summary.jailed,
            rebelling = summary.rebelling,
            "tick complete"
        );
        self.clock = now;
        self.history.push(summary);
        Ok(summary)
    }

    /// Start an independent run with `seed`: redraw the population from the
    /// config, clear the grid, place everyone again and restart the history
    /// at tick 0.
    pub fn reset(&mut self, seed: u64) -> SimResult<()> {
        self.config.seed = seed;
        self.rng = SimRng::new(seed);
        self.population = PopulationBuilder::from_config(&self.config).build(&mut self.rng);
        self.world.reset();
        let ids: Vec<EntityId> = self.population.ids().collect();
        self.world.place(&ids, &mut self.rng)?;
        self.clock = Tick::ZERO;
        self.history.clear();
        self.history.push(TickSummary::capture(Tick::ZERO, &self.population));
        Ok(())
    }

    /// Every summary recorded so far, tick 0 first.
    #[inline]
    pub fn history(&self) -> &[TickSummary] {
        &self.history
    }

    /// Consume the sim and keep only its history.
    pub fn into_history(self) -> Vec<TickSummary> {
        self.history
    }

    /// The most recent summary.
    #[inline]
    pub fn summary(&self) -> TickSummary {
        // The history always holds at least the tick-0 record.
        self.history[self.history.len() - 1]
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn report_setup<O: SimObserver>(&self, observer: &mut O) {
        observer.on_summary(&self.summary());
        if Tick::ZERO.is_output_tick(self.config.output_interval_ticks) {
            observer.on_snapshot(Tick::ZERO, &self.world, &self.population);
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        observer.on_tick_start(self.clock.next());
        let summary = self.tick()?;
        observer.on_summary(&summary);
        if summary.tick.is_output_tick(self.config.output_interval_ticks) {
            observer.on_snapshot(summary.tick, &self.world, &self.population);
        }
        Ok(())
    }

    /// Move, then act, for one entity.  Each round sees the result of the
    /// previous one.
    fn process_entity(&mut self, entity: EntityId, now: Tick) -> SimResult<()> {
        let intents = {
            let ctx = SimContext::new(now, &self.world, &self.population);
            self.behavior.plan_move(entity, &ctx)?
        };
        self.apply_intents(entity, intents)?;

        let intents = {
            let ctx = SimContext::new(now, &self.world, &self.population);
            self.behavior.plan_act(entity, &ctx, &mut self.rng)?
        };
        self.apply_intents(entity, intents)
    }

    /// Apply one entity's intents before the next entity runs.
    fn apply_intents(&mut self, entity: EntityId, intents: Vec<Intent>) -> SimResult<()> {
        for intent in intents {
            match intent {
                // ── MoveWithin: random patch free of active occupants ──────
                Intent::MoveWithin { scope } => {
                    self.world.move_within(entity, scope, &self.population, &mut self.rng)?;
                }

                // ── SetRebel: record the agent's decision ──────────────────
                Intent::SetRebel(rebel) => {
                    self.population.agent_mut(entity)?.set_rebel(rebel);
                }

                // ── Arrest: jail the suspect, cop joins its patch ──────────
                //
                // The suspect's rebel flag is left as it is; the jail term
                // alone makes it inactive.
                Intent::Arrest { suspect, jail_term } => {
                    self.population.agent_mut(suspect)?.set_jail_term(jail_term);
                    self.world.relocate_to(entity, suspect)?;
                    trace!(cop = %entity, %suspect, jail_term, "arrest");
                }
            }
        }
        Ok(())
    }
}
