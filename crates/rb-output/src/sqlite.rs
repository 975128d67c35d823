//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `run_parameters`, `tick_summaries` and `entity_snapshots`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EntitySnapshotRow, OutputResult, RunParametersRow, TickSummaryRow};

/// Writes simulation output to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS run_parameters (
                 seed                  INTEGER NOT NULL,
                 total_ticks           INTEGER NOT NULL,
                 dimension             INTEGER NOT NULL,
                 vision                INTEGER NOT NULL,
                 max_jail_term         INTEGER NOT NULL,
                 movement              INTEGER NOT NULL,
                 cops                  INTEGER NOT NULL,
                 agents                INTEGER NOT NULL,
                 cop_density           REAL    NOT NULL,
                 agent_density         REAL    NOT NULL,
                 government_legitimacy REAL    NOT NULL,
                 legitimacy_mode       TEXT    NOT NULL,
                 threshold             REAL    NOT NULL,
                 k                     REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS tick_summaries (
                 tick      INTEGER PRIMARY KEY,
                 quiet     INTEGER NOT NULL,
                 jailed    INTEGER NOT NULL,
                 rebelling INTEGER NOT NULL
             );
             CREATE TABLE IF NOT EXISTS entity_snapshots (
                 entity_id INTEGER NOT NULL,
                 tick      INTEGER NOT NULL,
                 kind      TEXT    NOT NULL,
                 x         INTEGER NOT NULL,
                 y         INTEGER NOT NULL,
                 active    INTEGER NOT NULL,
                 rebel     INTEGER NOT NULL,
                 jail_term INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_parameters(&mut self, row: &RunParametersRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO run_parameters \
             (seed, total_ticks, dimension, vision, max_jail_term, movement, cops, agents, \
              cop_density, agent_density, government_legitimacy, legitimacy_mode, threshold, k) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            rusqlite::params![
                row.seed as i64,
                row.total_ticks as i64,
                row.dimension,
                row.vision,
                row.max_jail_term,
                row.movement as i64,
                row.cops as i64,
                row.agents as i64,
                row.cop_density,
                row.agent_density,
                row.government_legitimacy,
                row.legitimacy_mode,
                row.threshold,
                row.k,
            ],
        )?;
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO tick_summaries (tick, quiet, jailed, rebelling) \
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                row.tick as i64,
                row.quiet as i64,
                row.jailed as i64,
                row.rebelling as i64,
            ],
        )?;
        Ok(())
    }

    fn write_snapshots(&mut self, rows: &[EntitySnapshotRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO entity_snapshots \
                 (entity_id, tick, kind, x, y, active, rebel, jail_term) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.entity_id,
                    row.tick as i64,
                    row.kind,
                    row.x,
                    row.y,
                    row.active as i64,
                    row.rebel as i64,
                    row.jail_term,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
