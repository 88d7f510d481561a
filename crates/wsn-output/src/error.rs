//! Error types for wsn-output.

use thiserror::Error;

/// Failure while recording a run.
///
/// [`SimOutputObserver`][crate::SimOutputObserver] keeps the first of these
/// and lets the simulation carry on.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating or writing an output file failed.
    #[error("output file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot write CSV record: {0}")]
    Csv(#[from] csv::Error),

    /// A row arrived after `finish` closed the named table.
    #[error("{0} output already finished")]
    Finished(&'static str),

    #[cfg(feature = "sqlite")]
    #[error("SQLite output error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// Building a record batch failed (schema and column mismatch).
    #[cfg(feature = "parquet")]
    #[error("cannot build Arrow batch: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    #[cfg(feature = "parquet")]
    #[error("Parquet output error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
