//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use rb_agent::{Entity, Population};
use rb_core::{RebellionConfig, Tick};
use rb_sim::{SimObserver, TickSummary};
use rb_world::World;

use crate::row::{EntitySnapshotRow, RunParametersRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes the run parameters, every tick summary and
/// periodic entity snapshots to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    /// Create an observer backed by `writer` and record `config` as the run
    /// parameters.
    pub fn new(mut writer: W, config: &RebellionConfig) -> Self {
        let result = writer.write_parameters(&RunParametersRow::from_config(config));
        let mut observer = Self { writer, last_error: None };
        observer.store_err(result);
        observer
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

/// One row per placed entity, in id order.
pub(crate) fn snapshot_rows(tick: Tick, world: &World, population: &Population) -> Vec<EntitySnapshotRow> {
    population
        .ids()
        .filter_map(|id| {
            let entity = population.get(id)?;
            let (x, y) = world.coords_of(id)?;
            let (rebel, jail_term) = match entity {
                Entity::Cop(_) => (false, 0),
                Entity::Agent(a) => (a.is_rebel(), a.jail_term()),
            };
            Some(EntitySnapshotRow {
                entity_id: id.0,
                tick: tick.0,
                kind: entity.kind().as_str(),
                x,
                y,
                active: entity.is_active(),
                rebel,
                jail_term,
            })
        })
        .collect()
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_summary(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, world: &World, population: &Population) {
        let rows = snapshot_rows(tick, world, population);
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
