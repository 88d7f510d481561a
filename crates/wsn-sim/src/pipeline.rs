//! The `DataPipeline` trait: how collected data becomes a payload.
//!
//! Between collection and transmission every sample passes through
//! `process` then `encrypt`.  Only the resulting size matters to the
//! engine: it sets the payload term of the transmission cost.

/// Pluggable payload transform.
///
/// Both steps default to the identity, so implementors override only the
/// stage they model.  Results that are negative or NaN are treated as an
/// empty payload by the engine.
///
/// # Example
///
/// ```rust,ignore
/// struct Compress;
///
/// impl DataPipeline for Compress {
///     fn process(&self, data: f64) -> f64 {
///         data * 0.5
///     }
/// }
/// ```
pub trait DataPipeline: Send + Sync + 'static {
    /// Backend processing (filtering, aggregation, compression …).
    fn process(&self, data: f64) -> f64 {
        data
    }

    /// Encryption, typically adding overhead.
    fn encrypt(&self, data: f64) -> f64 {
        data
    }
}

/// Processing shrinks data by `processing_ratio`; encryption grows it by
/// `encryption_overhead`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProxyPipeline {
    pub processing_ratio:    f64,
    pub encryption_overhead: f64,
}

impl Default for ProxyPipeline {
    /// 10 % reduction from processing, 10 % growth from encryption.
    fn default() -> Self {
        Self {
            processing_ratio:    0.9,
            encryption_overhead: 1.1,
        }
    }
}

impl DataPipeline for ProxyPipeline {
    fn process(&self, data: f64) -> f64 {
        data * self.processing_ratio
    }

    fn encrypt(&self, data: f64) -> f64 {
        data * self.encryption_overhead
    }
}

/// A [`DataPipeline`] that sends collected data unchanged.
///
/// Useful in tests where the payload must equal the collected amount.
#[derive(Copy, Clone, Debug, Default)]
pub struct PassthroughPipeline;

impl DataPipeline for PassthroughPipeline {}
