//! `rb-output`: simulation output writers for the rust_rebellion simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend  | Files created                                                          |
//! |-----------|----------|------------------------------------------------------------------------|
//! | *(none)*  | CSV      | `run_parameters.csv`, `tick_summaries.csv`, `entity_snapshots.csv`     |
//! | `sqlite`  | SQLite   | `output.db`                                                            |
//! | `parquet` | Parquet  | `run_parameters.parquet`, `tick_summaries.parquet`, `entity_snapshots.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rb_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rb_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer, &config);
//! sim.run(&mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{EntitySnapshotRow, RunParametersRow, TickSummaryRow};
pub use writer::{OutputWriter, export_history};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
