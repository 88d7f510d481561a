//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `energy_history`, `transmissions` and `round_summaries`.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{EnergyRow, OutputResult, RoundSummaryRow, TransmissionRow};

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
             CREATE TABLE IF NOT EXISTS energy_history (
                 round   INTEGER NOT NULL,
                 node_id INTEGER NOT NULL,
                 energy  REAL    NOT NULL,
                 alive   INTEGER NOT NULL,
                 x       REAL    NOT NULL,
                 y       REAL    NOT NULL,
                 PRIMARY KEY (round, node_id)
             );
             CREATE TABLE IF NOT EXISTS transmissions (
                 round       INTEGER NOT NULL,
                 source      INTEGER NOT NULL,
                 hops        INTEGER NOT NULL,
                 path        TEXT    NOT NULL,
                 payload     REAL    NOT NULL,
                 energy_cost REAL    NOT NULL,
                 link_cost   REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS round_summaries (
                 round               INTEGER PRIMARY KEY,
                 alive_nodes         INTEGER NOT NULL,
                 transmissions       INTEGER NOT NULL,
                 unreachable         INTEGER NOT NULL,
                 insufficient_energy INTEGER NOT NULL,
                 deaths              INTEGER NOT NULL,
                 energy_harvested    REAL    NOT NULL,
                 energy_consumed     REAL    NOT NULL,
                 data_collected      REAL    NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_energies(&mut self, rows: &[EnergyRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO energy_history (round, node_id, energy, alive, x, y) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.round,
                    row.node_id,
                    row.energy,
                    row.alive as i64,
                    row.x,
                    row.y,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_transmission(&mut self, row: &TransmissionRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO transmissions \
             (round, source, hops, path, payload, energy_cost, link_cost) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                row.round,
                row.source,
                row.hops,
                row.path,
                row.payload,
                row.energy_cost,
                row.link_cost,
            ],
        )?;
        Ok(())
    }

    fn write_round_summary(&mut self, row: &RoundSummaryRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO round_summaries \
             (round, alive_nodes, transmissions, unreachable, insufficient_energy, \
              deaths, energy_harvested, energy_consumed, data_collected) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                row.round,
                row.alive_nodes,
                row.transmissions,
                row.unreachable,
                row.insufficient_energy,
                row.deaths,
                row.energy_harvested,
                row.energy_consumed,
                row.data_collected,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
