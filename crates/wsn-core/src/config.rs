//! Run-level simulation configuration.

use crate::{Bounds, Interval, WsnError, WsnResult};

/// Which edges connect the base station to the rest of the routing graph.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SinkEdges {
    /// Node → base station only.  The base station can never relay.
    #[default]
    Inbound,
    /// Node ↔ base station, same weight both ways.
    Bidirectional,
}

/// Top-level simulation configuration.
///
/// `Default` is the stock deployment: harvest in `[0, 5]`,
/// collection in `[0, 10]`, death threshold 5, nodes repositioned inside a
/// 10×10 field after every round.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of rounds to simulate.  Must be positive.
    pub rounds: u64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Energy below which a live node is forced to zero and marked dead.
    pub death_threshold: f64,

    /// Energy gained per harvest.
    pub harvest: Interval,

    /// Data produced per collection.
    pub collect: Interval,

    /// Move every live node to a uniform random position after each round.
    pub reposition: bool,

    /// Area used for repositioning.
    pub bounds: Bounds,

    /// Decrement a node's accumulated data by the collected amount when its
    /// transmission succeeds.  Off by default: the counter only grows.
    ///
    /// The raw collected amount is drained, not the processed payload that
    /// went on the wire: the counter tracks collected data, and the payload
    /// is usually not the same size.
    pub drain_data_on_transmit: bool,

    /// Base-station edge layout of the routing graph.
    pub sink_edges: SinkEdges,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            rounds:                 10,
            seed:                   0,
            death_threshold:        5.0,
            harvest:                Interval::new(0.0, 5.0),
            collect:                Interval::new(0.0, 10.0),
            reposition:             true,
            bounds:                 Bounds::default(),
            drain_data_on_transmit: false,
            sink_edges:             SinkEdges::Inbound,
        }
    }
}

impl SimConfig {
    /// Reject settings the simulation cannot run with.
    pub fn validate(&self) -> WsnResult<()> {
        if self.rounds == 0 {
            return Err(WsnError::Config("round count must be positive".into()));
        }
        if !self.death_threshold.is_finite() || self.death_threshold < 0.0 {
            return Err(WsnError::Config(format!(
                "death threshold must be a non-negative number, got {}",
                self.death_threshold
            )));
        }
        if !self.harvest.is_non_negative() {
            return Err(WsnError::Config(format!(
                "harvest range {} must be a non-negative interval",
                self.harvest
            )));
        }
        if !self.collect.is_non_negative() {
            return Err(WsnError::Config(format!(
                "collect range {} must be a non-negative interval",
                self.collect
            )));
        }
        if !self.bounds.is_valid() {
            return Err(WsnError::Config(format!(
                "reposition bounds {}..{} are empty or not finite",
                self.bounds.min, self.bounds.max
            )));
        }
        Ok(())
    }
}
