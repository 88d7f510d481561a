//! A single battery-powered sensor node and the base station.
//!
//! # Energy invariants
//!
//! - `energy >= 0` at all times; every write floors at zero.
//! - A node is alive while `energy > 0`.  Reaching zero (by transmission or
//!   by the death check) sets a permanent `dead` flag: a dead node no longer
//!   harvests, collects or transmits.
//!
//! # Transmission cost
//!
//!   cost = hops(path) + payload / 10
//!
//! where `hops` is the edge count of the path (`path.len() - 1`).  This is
//! deliberately independent of the link-cost metric used for routing.

use log::debug;
use wsn_core::{Hop, Interval, NodeId, NodeRng, Point};

/// Divisor turning payload size into transmission energy.
pub const PAYLOAD_COST_DIVISOR: f64 = 10.0;

/// Number of edges in `path`.
#[inline]
pub fn hop_count(path: &[Hop]) -> usize {
    path.len().saturating_sub(1)
}

/// Energy needed to send `payload` along `path`.
#[inline]
pub fn transmission_cost(payload: f64, path: &[Hop]) -> f64 {
    hop_count(path) as f64 + payload / PAYLOAD_COST_DIVISOR
}

// ── SensorNode ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorNode {
    pub id:           NodeId,
    /// Mutable between rounds (repositioning).
    pub position:     Point,
    energy:           f64,
    accumulated_data: f64,
    dead:             bool,
}

impl SensorNode {
    /// Create a node.  Negative or NaN energy is floored to zero, which makes
    /// the node dead from the start.
    pub fn new(id: NodeId, position: Point, energy: f64) -> Self {
        let energy = energy.max(0.0);
        Self {
            id,
            position,
            energy,
            accumulated_data: 0.0,
            dead: energy <= 0.0,
        }
    }

    #[inline]
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Total data collected so far.
    #[inline]
    pub fn accumulated_data(&self) -> f64 {
        self.accumulated_data
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.dead && self.energy > 0.0
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    /// Add a harvest sample drawn from `range`.  Returns the energy gained
    /// (always 0 for a dead node).
    pub fn harvest_energy(&mut self, rng: &mut NodeRng, range: &Interval) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        let gained = range.sample(rng).max(0.0);
        self.energy += gained;
        debug!("{} harvested {gained:.2} energy", self.id);
        gained
    }

    /// Collect a data sample drawn from `range`.  Returns the amount
    /// collected (always 0 for a dead node).
    pub fn collect_data(&mut self, rng: &mut NodeRng, range: &Interval) -> f64 {
        if self.is_dead() {
            return 0.0;
        }
        let collected = range.sample(rng).max(0.0);
        self.accumulated_data += collected;
        debug!("{} collected {collected:.2} data", self.id);
        collected
    }

    /// Reduce the accumulated data counter, flooring at zero.
    pub fn drain_data(&mut self, amount: f64) {
        self.accumulated_data = (self.accumulated_data - amount.max(0.0)).max(0.0);
    }

    /// Attempt to send `payload` along `path`.
    ///
    /// Succeeds iff the node is alive and can afford
    /// [`transmission_cost`]; on success the cost is deducted exactly.  On
    /// failure energy is unchanged.
    pub fn transmit(&mut self, payload: f64, path: &[Hop]) -> bool {
        if self.is_dead() {
            return false;
        }
        let cost = transmission_cost(payload, path);
        if self.energy < cost {
            debug!(
                "{} has insufficient energy to transmit ({:.2} < {cost:.2})",
                self.id, self.energy
            );
            return false;
        }
        self.energy = (self.energy - cost).max(0.0);
        if self.energy == 0.0 {
            self.dead = true;
        }
        true
    }

    /// Force a live node whose energy fell below `threshold` to zero.
    ///
    /// Returns `true` if this call killed the node.
    pub fn apply_death_check(&mut self, threshold: f64) -> bool {
        if self.energy > 0.0 && self.energy < threshold {
            self.energy = 0.0;
            self.dead = true;
            return true;
        }
        false
    }
}

// ── BaseStation ───────────────────────────────────────────────────────────────

/// The universal sink.  Fixed position, energy never consumed.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStation {
    pub position: Point,
}

impl BaseStation {
    #[inline]
    pub const fn new(position: Point) -> Self {
        Self { position }
    }

    /// Effectively unlimited: `+∞`.
    #[inline]
    pub fn energy(&self) -> f64 {
        f64::INFINITY
    }
}
