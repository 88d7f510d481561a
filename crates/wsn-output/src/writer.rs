//! The `OutputWriter` trait implemented by all backend writers.

use crate::{EnergyRow, OutputResult, RoundSummaryRow, TransmissionRow};

/// Trait implemented by CSV, SQLite, and Parquet writers.
///
/// Errors surface through [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error]
/// when the writer is driven by a simulation.
pub trait OutputWriter {
    /// Write the end-of-round energy of a batch of nodes.
    fn write_energies(&mut self, rows: &[EnergyRow]) -> OutputResult<()>;

    /// Write one successful transmission.
    fn write_transmission(&mut self, row: &TransmissionRow) -> OutputResult<()>;

    /// Write one round summary row.
    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
