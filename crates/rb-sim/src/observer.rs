//! Simulation observer trait for progress reporting and data collection.

use rb_agent::Population;
use rb_core::Tick;
use rb_world::World;

use crate::TickSummary;

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example
///
/// ```rust,ignore
/// struct RebelPrinter;
///
/// impl SimObserver for RebelPrinter {
///     fn on_summary(&mut self, summary: &TickSummary) {
///         println!("{}: {} rebelling", summary.tick, summary.rebelling);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before the execution order is
    /// drawn.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called with the tick-0 summary when a fresh run starts and with each
    /// tick's summary once that tick completes.
    fn on_summary(&mut self, _summary: &TickSummary) {}

    /// Called at snapshot intervals (every `config.output_interval_ticks`
    /// ticks, tick 0 included).
    ///
    /// Provides read-only access to the grid and every entity so output
    /// writers can record positions and states.
    fn on_snapshot(&mut self, _tick: Tick, _world: &World, _population: &Population) {}

    /// Called once after the final tick completes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
