//! Core error type.
//!
//! Sub-crates define their own error enums and convert `WsnError` into them
//! via `From`.

use thiserror::Error;

/// The top-level error type for `wsn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum WsnError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `wsn-*` crates.
pub type WsnResult<T> = Result<T, WsnError>;
