//! CSV output backend.
//!
//! Creates three files in the configured output directory:
//! - `energy_history.csv`
//! - `transmissions.csv`
//! - `round_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{EnergyRow, OutputError, OutputResult, RoundSummaryRow, TransmissionRow};

pub(crate) const ENERGY_HEADERS: [&str; 6] = ["round", "node_id", "energy", "alive", "x", "y"];

pub(crate) const TRANSMISSION_HEADERS: [&str; 7] =
    ["round", "source", "hops", "path", "payload", "energy_cost", "link_cost"];

pub(crate) const SUMMARY_HEADERS: [&str; 9] = [
    "round",
    "alive_nodes",
    "transmissions",
    "unreachable",
    "insufficient_energy",
    "deaths",
    "energy_harvested",
    "energy_consumed",
    "data_collected",
];

/// Writes simulation output to three CSV files.
pub struct CsvWriter {
    energies:      Writer<File>,
    transmissions: Writer<File>,
    summaries:     Writer<File>,
    finished:      bool,
}

impl CsvWriter {
    /// Open (or create) the CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut energies = Writer::from_path(dir.join("energy_history.csv"))?;
        energies.write_record(ENERGY_HEADERS)?;

        let mut transmissions = Writer::from_path(dir.join("transmissions.csv"))?;
        transmissions.write_record(TRANSMISSION_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("round_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            energies,
            transmissions,
            summaries,
            finished: false,
        })
    }

    fn ensure_open(&self, table: &'static str) -> OutputResult<()> {
        if self.finished {
            return Err(OutputError::Finished(table));
        }
        Ok(())
    }
}

impl OutputWriter for CsvWriter {
    fn write_energies(&mut self, rows: &[EnergyRow]) -> OutputResult<()> {
        self.ensure_open("energy history")?;
        for row in rows {
            self.energies.write_record(&[
                row.round.to_string(),
                row.node_id.to_string(),
                row.energy.to_string(),
                (row.alive as u8).to_string(),
                row.x.to_string(),
                row.y.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_transmission(&mut self, row: &TransmissionRow) -> OutputResult<()> {
        self.ensure_open("transmissions")?;
        self.transmissions.write_record(&[
            row.round.to_string(),
            row.source.to_string(),
            row.hops.to_string(),
            row.path.clone(),
            row.payload.to_string(),
            row.energy_cost.to_string(),
            row.link_cost.to_string(),
        ])?;
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.ensure_open("round summaries")?;
        self.summaries.write_record(&[
            row.round.to_string(),
            row.alive_nodes.to_string(),
            row.transmissions.to_string(),
            row.unreachable.to_string(),
            row.insufficient_energy.to_string(),
            row.deaths.to_string(),
            row.energy_harvested.to_string(),
            row.energy_consumed.to_string(),
            row.data_collected.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.energies.flush()?;
        self.transmissions.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
