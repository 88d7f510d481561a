//! Validated builder for `NodeSet` + `NodeRngs`.
//!
//! # Usage
//!
//! ```rust
//! use wsn_core::Point;
//! use wsn_node::NodeSetBuilder;
//!
//! let (nodes, rngs) = NodeSetBuilder::new(Point::new(5.0, 5.0), /*seed=*/ 42)
//!     .node(Point::new(1.0, 1.0), 12.0)
//!     .node(Point::new(8.0, 2.0), 17.5)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(nodes.len(), 2);
//! assert_eq!(rngs.len(),  2);
//! ```

use wsn_core::{NodeId, Point, WsnError, WsnResult};

use crate::{BaseStation, NodeRngs, NodeSet, SensorNode};

/// Builder for [`NodeSet`] + [`NodeRngs`].
///
/// Positions and energies may be supplied pairwise ([`node`](Self::node)) or
/// as two parallel vectors; [`build`](Self::build) checks they line up.
pub struct NodeSetBuilder {
    base_station: Point,
    seed:         u64,
    positions:    Vec<Point>,
    energies:     Vec<f64>,
}

impl NodeSetBuilder {
    /// Create a builder for a network draining into `base_station`, seeding
    /// per-node RNGs from `seed`.
    pub fn new(base_station: Point, seed: u64) -> Self {
        Self {
            base_station,
            seed,
            positions: Vec::new(),
            energies:  Vec::new(),
        }
    }

    /// Append one node.  IDs are assigned in insertion order.
    pub fn node(mut self, position: Point, energy: f64) -> Self {
        self.positions.push(position);
        self.energies.push(energy);
        self
    }

    /// Append many positions; pair with [`energies`](Self::energies).
    pub fn positions(mut self, positions: impl IntoIterator<Item = Point>) -> Self {
        self.positions.extend(positions);
        self
    }

    /// Append many initial energies; pair with [`positions`](Self::positions).
    pub fn energies(mut self, energies: impl IntoIterator<Item = f64>) -> Self {
        self.energies.extend(energies);
        self
    }

    /// Validate and construct `NodeSet` and `NodeRngs`.
    ///
    /// Fails if the position and energy counts differ, if any energy is
    /// negative or not finite, or if any coordinate is not finite.
    pub fn build(self) -> WsnResult<(NodeSet, NodeRngs)> {
        if self.positions.len() != self.energies.len() {
            return Err(WsnError::Config(format!(
                "{} node positions but {} initial energies",
                self.positions.len(),
                self.energies.len()
            )));
        }
        if !self.base_station.is_finite() {
            return Err(WsnError::Config(format!(
                "base station position {} is not finite",
                self.base_station
            )));
        }
        if u32::try_from(self.positions.len()).is_err() {
            return Err(WsnError::Config("too many nodes".into()));
        }

        let mut nodes = Vec::with_capacity(self.positions.len());
        for (i, (&position, &energy)) in self.positions.iter().zip(&self.energies).enumerate() {
            let id = NodeId(i as u32);
            if !position.is_finite() {
                return Err(WsnError::Config(format!("{id} position {position} is not finite")));
            }
            if !energy.is_finite() || energy < 0.0 {
                return Err(WsnError::Config(format!(
                    "{id} initial energy must be a non-negative number, got {energy}"
                )));
            }
            nodes.push(SensorNode::new(id, position, energy));
        }

        let rngs = NodeRngs::new(nodes.len(), self.seed);
        let set = NodeSet::new(nodes, BaseStation::new(self.base_station));
        Ok((set, rngs))
    }
}
