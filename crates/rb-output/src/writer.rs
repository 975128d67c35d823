//! The `OutputWriter` trait implemented by all backend writers.

use rb_core::RebellionConfig;
use rb_sim::TickSummary;

use crate::{EntitySnapshotRow, OutputResult, RunParametersRow, TickSummaryRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// The observer never propagates these results; errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Record the run's parameters.  Called once, before any summary.
    fn write_parameters(&mut self, row: &RunParametersRow) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Write a batch of entity snapshots.
    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Write a finished run: its parameters, every summary in `history`, then
/// [`finish`][OutputWriter::finish].
///
/// Used for replicates, which run without an observer attached.
pub fn export_history<W: OutputWriter>(
    writer:  &mut W,
    config:  &RebellionConfig,
    history: &[TickSummary],
) -> OutputResult<()> {
    writer.write_parameters(&RunParametersRow::from_config(config))?;
    for summary in history {
        writer.write_tick_summary(&TickSummaryRow::from(summary))?;
    }
    writer.finish()
}
