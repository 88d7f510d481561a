//! `SimOutputObserver<W>`: bridges `SimObserver` to an `OutputWriter`.

use wsn_core::Round;
use wsn_node::NodeSet;
use wsn_sim::{RoundSummary, SimObserver, TransmissionRecord};

use crate::row::{EnergyRow, RoundSummaryRow, TransmissionRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes energy history, transmissions and round
/// summaries to any [`OutputWriter`] backend (CSV, SQLite, Parquet, …).
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
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

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_transmission(&mut self, record: &TransmissionRecord) {
        let result = self.writer.write_transmission(&TransmissionRow::from(record));
        self.store_err(result);
    }

    fn on_round_end(&mut self, summary: &RoundSummary, nodes: &NodeSet) {
        let rows: Vec<EnergyRow> = nodes
            .iter()
            .map(|node| EnergyRow::from_node(summary.round, node))
            .collect();
        if !rows.is_empty() {
            let result = self.writer.write_energies(&rows);
            self.store_err(result);
        }

        let result = self.writer.write_round_summary(&RoundSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_round: Round, _nodes: &NodeSet) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
