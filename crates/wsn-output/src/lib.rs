//! `wsn-output`: simulation output writers for the sensor network simulator.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                       |
//! |-----------|---------|---------------------------------------------------------------------|
//! | *(none)*  | CSV     | `energy_history.csv`, `transmissions.csv`, `round_summaries.csv`    |
//! | `sqlite`  | SQLite  | `output.db`                                                         |
//! | `parquet` | Parquet | `energy_history.parquet`, `transmissions.parquet`, `round_summaries.parquet` |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `wsn_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wsn_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
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
pub use row::{EnergyRow, RoundSummaryRow, TransmissionRow, encode_path};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
