//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `run_parameters.csv`
//! - `tick_summaries.csv`
//! - `entity_snapshots.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EntitySnapshotRow, OutputResult, RunParametersRow, TickSummaryRow};

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    parameters: Writer<File>,
    summaries:  Writer<File>,
    snapshots:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the three CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut parameters = Writer::from_path(dir.join("run_parameters.csv"))?;
        parameters.write_record([
            "seed", "total_ticks", "dimension", "vision", "max_jail_term", "movement",
            "cops", "agents", "cop_density", "agent_density", "government_legitimacy",
            "legitimacy_mode", "threshold", "k",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(["tick", "quiet", "jailed", "rebelling"])?;

        let mut snapshots = Writer::from_path(dir.join("entity_snapshots.csv"))?;
        snapshots.write_record(["entity_id", "tick", "kind", "x", "y", "active", "rebel", "jail_term"])?;

        Ok(Self {
            parameters,
            summaries,
            snapshots,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_parameters(&mut self, row: &RunParametersRow) -> OutputResult<()> {
        self.parameters.write_record(&[
            row.seed.to_string(),
            row.total_ticks.to_string(),
            row.dimension.to_string(),
            row.vision.to_string(),
            row.max_jail_term.to_string(),
            (row.movement as u8).to_string(),
            row.cops.to_string(),
            row.agents.to_string(),
            row.cop_density.to_string(),
            row.agent_density.to_string(),
            row.government_legitimacy.to_string(),
            row.legitimacy_mode.to_string(),
            row.threshold.to_string(),
            row.k.to_string(),
        ])?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.quiet.to_string(),
            row.jailed.to_string(),
            row.rebelling.to_string(),
        ])?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.entity_id.to_string(),
                row.tick.to_string(),
                row.kind.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                (row.active as u8).to_string(),
                (row.rebel as u8).to_string(),
                row.jail_term.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.parameters.flush()?;
        self.summaries.flush()?;
        self.snapshots.flush()?;
        Ok(())
    }
}
