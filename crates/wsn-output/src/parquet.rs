//! Parquet output backend (feature `parquet`).
//!
//! Creates three files in the configured output directory:
//! - `energy_history.parquet`
//! - `transmissions.parquet`
//! - `round_summaries.parquet`

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{BooleanBuilder, Float64Builder, StringBuilder, UInt32Builder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{EnergyRow, OutputError, OutputResult, RoundSummaryRow, TransmissionRow};

fn energy_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("round",   DataType::UInt64,  false),
        Field::new("node_id", DataType::UInt32,  false),
        Field::new("energy",  DataType::Float64, false),
        Field::new("alive",   DataType::Boolean, false),
        Field::new("x",       DataType::Float64, false),
        Field::new("y",       DataType::Float64, false),
    ]))
}

fn transmission_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("round",       DataType::UInt64,  false),
        Field::new("source",      DataType::UInt32,  false),
        Field::new("hops",        DataType::UInt32,  false),
        Field::new("path",        DataType::Utf8,    false),
        Field::new("payload",     DataType::Float64, false),
        Field::new("energy_cost", DataType::Float64, false),
        Field::new("link_cost",   DataType::Float64, false),
    ]))
}

fn summary_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("round",               DataType::UInt64,  false),
        Field::new("alive_nodes",         DataType::UInt64,  false),
        Field::new("transmissions",       DataType::UInt64,  false),
        Field::new("unreachable",         DataType::UInt64,  false),
        Field::new("insufficient_energy", DataType::UInt64,  false),
        Field::new("deaths",              DataType::UInt64,  false),
        Field::new("energy_harvested",    DataType::Float64, false),
        Field::new("energy_consumed",     DataType::Float64, false),
        Field::new("data_collected",      DataType::Float64, false),
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
///
/// Transmissions and summaries arrive one row at a time and are buffered
/// until `finish()` so each file gets large row groups.
pub struct ParquetWriter {
    energies:      Option<ArrowWriter<File>>,
    transmissions: Option<ArrowWriter<File>>,
    summaries:     Option<ArrowWriter<File>>,
    energy_schema: Arc<Schema>,
    tx_schema:     Arc<Schema>,
    summ_schema:   Arc<Schema>,
    pending_tx:    Vec<TransmissionRow>,
    pending_summ:  Vec<RoundSummaryRow>,
}

impl ParquetWriter {
    /// Create all three Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let energy_schema = energy_schema();
        let tx_schema = transmission_schema();
        let summ_schema = summary_schema();

        Ok(Self {
            energies:      Some(open(dir, "energy_history.parquet", &energy_schema)?),
            transmissions: Some(open(dir, "transmissions.parquet", &tx_schema)?),
            summaries:     Some(open(dir, "round_summaries.parquet", &summ_schema)?),
            energy_schema,
            tx_schema,
            summ_schema,
            pending_tx:    Vec::new(),
            pending_summ:  Vec::new(),
        })
    }

    fn flush_transmissions(&mut self) -> OutputResult<()> {
        if self.pending_tx.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.transmissions.as_mut() else {
            return Ok(());
        };

        let mut rounds   = UInt64Builder::new();
        let mut sources  = UInt32Builder::new();
        let mut hops     = UInt32Builder::new();
        let mut paths    = StringBuilder::new();
        let mut payloads = Float64Builder::new();
        let mut costs    = Float64Builder::new();
        let mut links    = Float64Builder::new();

        for row in self.pending_tx.drain(..) {
            rounds.append_value(row.round);
            sources.append_value(row.source);
            hops.append_value(row.hops);
            paths.append_value(&row.path);
            payloads.append_value(row.payload);
            costs.append_value(row.energy_cost);
            links.append_value(row.link_cost);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.tx_schema),
            vec![
                Arc::new(rounds.finish()),
                Arc::new(sources.finish()),
                Arc::new(hops.finish()),
                Arc::new(paths.finish()),
                Arc::new(payloads.finish()),
                Arc::new(costs.finish()),
                Arc::new(links.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn flush_summaries(&mut self) -> OutputResult<()> {
        if self.pending_summ.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.summaries.as_mut() else {
            return Ok(());
        };

        let mut rounds       = UInt64Builder::new();
        let mut alive        = UInt64Builder::new();
        let mut sent         = UInt64Builder::new();
        let mut unreachable  = UInt64Builder::new();
        let mut insufficient = UInt64Builder::new();
        let mut deaths       = UInt64Builder::new();
        let mut harvested    = Float64Builder::new();
        let mut consumed     = Float64Builder::new();
        let mut collected    = Float64Builder::new();

        for row in self.pending_summ.drain(..) {
            rounds.append_value(row.round);
            alive.append_value(row.alive_nodes);
            sent.append_value(row.transmissions);
            unreachable.append_value(row.unreachable);
            insufficient.append_value(row.insufficient_energy);
            deaths.append_value(row.deaths);
            harvested.append_value(row.energy_harvested);
            consumed.append_value(row.energy_consumed);
            collected.append_value(row.data_collected);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.summ_schema),
            vec![
                Arc::new(rounds.finish()),
                Arc::new(alive.finish()),
                Arc::new(sent.finish()),
                Arc::new(unreachable.finish()),
                Arc::new(insufficient.finish()),
                Arc::new(deaths.finish()),
                Arc::new(harvested.finish()),
                Arc::new(consumed.finish()),
                Arc::new(collected.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }
}

impl OutputWriter for ParquetWriter {
    fn write_energies(&mut self, rows: &[EnergyRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.energies.as_mut() else {
            return Err(OutputError::Finished("energy history"));
        };

        let mut rounds   = UInt64Builder::new();
        let mut node_ids = UInt32Builder::new();
        let mut energies = Float64Builder::new();
        let mut alive    = BooleanBuilder::new();
        let mut xs       = Float64Builder::new();
        let mut ys       = Float64Builder::new();

        for row in rows {
            rounds.append_value(row.round);
            node_ids.append_value(row.node_id);
            energies.append_value(row.energy);
            alive.append_value(row.alive);
            xs.append_value(row.x);
            ys.append_value(row.y);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.energy_schema),
            vec![
                Arc::new(rounds.finish()),
                Arc::new(node_ids.finish()),
                Arc::new(energies.finish()),
                Arc::new(alive.finish()),
                Arc::new(xs.finish()),
                Arc::new(ys.finish()),
            ],
        )?;
        writer.write(&batch)?;
        Ok(())
    }

    fn write_transmission(&mut self, row: &TransmissionRow) -> OutputResult<()> {
        if self.transmissions.is_none() {
            return Err(OutputError::Finished("transmissions"));
        }
        self.pending_tx.push(row.clone());
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        if self.summaries.is_none() {
            return Err(OutputError::Finished("round summaries"));
        }
        self.pending_summ.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_transmissions()?;
        self.flush_summaries()?;
        if let Some(w) = self.energies.take() {
            w.close()?;
        }
        if let Some(w) = self.transmissions.take() {
            w.close()?;
        }
        if let Some(w) = self.summaries.take() {
            w.close()?;
        }
        Ok(())
    }
}
