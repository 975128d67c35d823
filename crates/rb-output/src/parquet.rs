//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `run_parameters.parquet`
//! - `tick_summaries.parquet`
//! - `entity_snapshots.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{
    ArrayRef, BooleanBuilder, Float64Builder, StringBuilder, UInt32Builder, UInt64Builder,
};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{EntitySnapshotRow, OutputResult, RunParametersRow, TickSummaryRow};

fn parameters_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("seed",                  DataType::UInt64,  false),
        Field::new("total_ticks",           DataType::UInt64,  false),
        Field::new("dimension",             DataType::UInt32,  false),
        Field::new("vision",                DataType::UInt32,  false),
        Field::new("max_jail_term",         DataType::UInt32,  false),
        Field::new("movement",              DataType::Boolean, false),
        Field::new("cops",                  DataType::UInt64,  false),
        Field::new("agents",                DataType::UInt64,  false),
        Field::new("cop_density",           DataType::Float64, false),
        Field::new("agent_density",         DataType::Float64, false),
        Field::new("government_legitimacy", DataType::Float64, false),
        Field::new("legitimacy_mode",       DataType::Utf8,    false),
        Field::new("threshold",             DataType::Float64, false),
        Field::new("k",                     DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("tick",      DataType::UInt64, false),
        Field::new("quiet",     DataType::UInt64, false),
        Field::new("jailed",    DataType::UInt64, false),
        Field::new("rebelling", DataType::UInt64, false),
    ]))
}

fn snapshot_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("entity_id", DataType::UInt32,  false),
        Field::new("tick",      DataType::UInt64,  false),
        Field::new("kind",      DataType::Utf8,    false),
        Field::new("x",         DataType::UInt32,  false),
        Field::new("y",         DataType::UInt32,  false),
        Field::new("active",    DataType::Boolean, false),
        Field::new("rebel",     DataType::Boolean, false),
        Field::new("jail_term", DataType::UInt32,  false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

fn open(dir: &Path, name: &str, schema: &Arc<Schema>) -> OutputResult<ArrowWriter<File>> {
    let file = File::create(dir.join(name))?;
    Ok(ArrowWriter::try_new(file, Arc::clone(schema), Some(snappy_props()))?)
}

/// Writes simulation output to three Parquet files.
///
/// `finish()` **must** be called to write the Parquet file footers; files
/// written without calling `finish()` cannot be opened by Parquet readers.
pub struct ParquetWriter {
    parameters:   Option<ArrowWriter<File>>,
    summaries:    Option<ArrowWriter<File>>,
    snapshots:    Option<ArrowWriter<File>>,
    param_schema: Arc<Schema>,
    summ_schema:  Arc<Schema>,
    snap_schema:  Arc<Schema>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let param_schema = parameters_schema();
        let summ_schema = summary_schema();
        let snap_schema = snapshot_schema();

        Ok(Self {
            parameters: Some(open(dir, "run_parameters.parquet", &param_schema)?),
            summaries:  Some(open(dir, "tick_summaries.parquet", &summ_schema)?),
            snapshots:  Some(open(dir, "entity_snapshots.parquet", &snap_schema)?),
            param_schema,
            summ_schema,
            snap_schema,
        })
    }
}

impl OutputWriter for ParquetWriter {
    fn write_parameters(&mut self, row: &RunParametersRow) -> OutputResult<()> {
        let Some(writer) = self.parameters.as_mut() else {
            return Ok(());
        };

        let mut mode = StringBuilder::new();
        mode.append_value(row.legitimacy_mode);
        let mut movement = BooleanBuilder::new();
        movement.append_value(row.movement);

        let u64s = |v: u64| -> ArrayRef {
            let mut b = UInt64Builder::new();
            b.append_value(v);
            Arc::new(b.finish())
        };
        let u32s = |v: u32| -> ArrayRef {
            let mut b = UInt32Builder::new();
            b.append_value(v);
            Arc::new(b.finish())
        };
        let f64s = |v: f64| -> ArrayRef {
            let mut b = Float64Builder::new();
            b.append_value(v);
            Arc::new(b.finish())
        };

        let batch = RecordBatch::try_new(
            Arc::clone(&self.param_schema),
            vec![
                u64s(row.seed),
                u64s(row.total_ticks),
                u32s(row.dimension),
                u32s(row.vision),
                u32s(row.max_jail_term),
                Arc::new(movement.finish()) as ArrayRef,
                u64s(row.cops),
                u64s(row.agents),
                f64s(row.cop_density),
                f64s(row.agent_density),
                f64s(row.government_legitimacy),
                Arc::new(mode.finish()) as ArrayRef,
                f64s(row.threshold),
                f64s(row.k),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut ticks     = UInt64Builder::new();
        let mut quiet     = UInt64Builder::new();
        let mut jailed    = UInt64Builder::new();
        let mut rebelling = UInt64Builder::new();

        ticks.append_value(row.tick);
        quiet.append_value(row.quiet);
        jailed.append_value(row.jailed);
        rebelling.append_value(row.rebelling);

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(ticks.finish()),
                Arc::new(quiet.finish()),
                Arc::new(jailed.finish()),
                Arc::new(rebelling.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.snapshots.as_mut() else {
            return Ok(());
        };

        let mut entity_ids = UInt32Builder::new();
        let mut ticks      = UInt64Builder::new();
        let mut kinds      = StringBuilder::new();
        let mut xs         = UInt32Builder::new();
        let mut ys         = UInt32Builder::new();
        let mut actives    = BooleanBuilder::new();
        let mut rebels     = BooleanBuilder::new();
        let mut jail_terms = UInt32Builder::new();

        for row in rows {
            entity_ids.append_value(row.entity_id);
            ticks.append_value(row.tick);
            kinds.append_value(row.kind);
            xs.append_value(row.x);
            ys.append_value(row.y);
            actives.append_value(row.active);
            rebels.append_value(row.rebel);
            jail_terms.append_value(row.jail_term);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.snap_schema),
            vec![
                Arc::new(entity_ids.finish()),
                Arc::new(ticks.finish()),
                Arc::new(kinds.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
                Arc::new(actives.finish()),
                Arc::new(rebels.finish()),
                Arc::new(jail_terms.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        for writer in [&mut self.parameters, &mut self.summaries, &mut self.snapshots] {
            if let Some(w) = writer.take() {
                w.close()?;
            }
        }
        Ok(())
    }
}
