//! Per-run records: energy history, transmissions, round summaries.

use wsn_core::{Hop, NodeId, Point, Round};
use wsn_node::{NodeSet, SensorNode};

// ── TransmissionRecord ────────────────────────────────────────────────────────

/// One successful delivery to the base station.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransmissionRecord {
    pub round:       Round,
    pub source:      NodeId,
    /// Source first, `Hop::BaseStation` last.
    pub path:        Vec<Hop>,
    /// Payload size after processing and encryption.
    pub payload:     f64,
    /// Energy deducted from the source.
    pub energy_cost: f64,
    /// Accumulated routing link cost of `path`.
    pub link_cost:   f64,
}

impl TransmissionRecord {
    /// Edges traversed.
    #[inline]
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Why a node with data did not transmit this round.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkipReason {
    /// No finite-cost path to the base station.
    Unreachable,
    /// A path exists but the source cannot afford it.
    InsufficientEnergy { required: f64, available: f64 },
}

// ── RoundSummary ──────────────────────────────────────────────────────────────

/// Aggregates for one round.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundSummary {
    pub round:               Round,
    /// Nodes alive after the round (death checks applied).
    pub alive_nodes:         usize,
    pub transmissions:       usize,
    pub unreachable:         usize,
    pub insufficient_energy: usize,
    /// Nodes alive at the start of the round and dead at its end.
    pub deaths:              usize,
    pub energy_harvested:    f64,
    /// Energy spent on successful transmissions.
    pub energy_consumed:     f64,
    pub data_collected:      f64,
}

impl RoundSummary {
    pub fn new(round: Round) -> Self {
        Self { round, ..Self::default() }
    }
}

// ── EnergyHistory ─────────────────────────────────────────────────────────────

/// End-of-round energy of every node, one series per `NodeId`.
///
/// Dead nodes keep receiving entries (always `0`), so every series has one
/// value per completed round.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyHistory {
    series: Vec<Vec<f64>>,
}

impl EnergyHistory {
    pub fn new(node_count: usize) -> Self {
        Self { series: vec![Vec::new(); node_count] }
    }

    #[inline]
    pub(crate) fn push(&mut self, node: NodeId, energy: f64) {
        self.series[node.index()].push(energy);
    }

    /// Energy series of one node, round 0 first.
    pub fn series(&self, node: NodeId) -> Option<&[f64]> {
        self.series.get(node.index()).map(Vec::as_slice)
    }

    /// Energy of `node` at the end of `round`.
    pub fn at(&self, node: NodeId, round: Round) -> Option<f64> {
        self.series(node)?.get(round.0 as usize).copied()
    }

    pub fn node_count(&self) -> usize {
        self.series.len()
    }

    /// Number of recorded rounds (identical for every node).
    pub fn rounds(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// `(NodeId, series)` pairs in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &[f64])> + '_ {
        self.series
            .iter()
            .enumerate()
            .map(|(i, s)| (NodeId(i as u32), s.as_slice()))
    }
}

// ── SimReport ─────────────────────────────────────────────────────────────────

/// Final state of one node.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeStatus {
    pub id:               NodeId,
    pub position:         Point,
    pub energy:           f64,
    pub accumulated_data: f64,
    pub alive:            bool,
}

impl From<&SensorNode> for NodeStatus {
    fn from(node: &SensorNode) -> Self {
        Self {
            id:               node.id,
            position:         node.position,
            energy:           node.energy(),
            accumulated_data: node.accumulated_data(),
            alive:            node.is_alive(),
        }
    }
}

/// Everything a run produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimReport {
    pub rounds_completed: u64,
    pub energy_history:   EnergyHistory,
    pub transmissions:    Vec<TransmissionRecord>,
    pub summaries:        Vec<RoundSummary>,
    pub final_status:     Vec<NodeStatus>,
}

impl SimReport {
    pub(crate) fn final_status(nodes: &NodeSet) -> Vec<NodeStatus> {
        nodes.iter().map(NodeStatus::from).collect()
    }

    pub fn alive_count(&self) -> usize {
        self.final_status.iter().filter(|s| s.alive).count()
    }

    /// Total energy spent on transmissions over the run.
    pub fn total_energy_consumed(&self) -> f64 {
        self.summaries.iter().map(|s| s.energy_consumed).sum()
    }
}
