//! Plain data row types written by output backends.

use wsn_core::{Hop, Round};
use wsn_node::SensorNode;
use wsn_sim::{RoundSummary, TransmissionRecord};

/// Path element written for the base station.
pub const BASE_STATION_LABEL: &str = "BS";

/// Separator between path elements.
pub const PATH_SEPARATOR: char = '>';

/// Render a path as `"3>0>BS"`.
pub fn encode_path(path: &[Hop]) -> String {
    let mut out = String::new();
    for (i, hop) in path.iter().enumerate() {
        if i > 0 {
            out.push(PATH_SEPARATOR);
        }
        match hop {
            Hop::Node(id)    => out.push_str(&id.0.to_string()),
            Hop::BaseStation => out.push_str(BASE_STATION_LABEL),
        }
    }
    out
}

/// One node's state at the end of a round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyRow {
    pub round:   u64,
    pub node_id: u32,
    pub energy:  f64,
    pub alive:   bool,
    pub x:       f64,
    pub y:       f64,
}

impl EnergyRow {
    pub fn from_node(round: Round, node: &SensorNode) -> Self {
        Self {
            round:   round.0,
            node_id: node.id.0,
            energy:  node.energy(),
            alive:   node.is_alive(),
            x:       node.position.x,
            y:       node.position.y,
        }
    }
}

/// One successful transmission.
#[derive(Debug, Clone, PartialEq)]
pub struct TransmissionRow {
    pub round:       u64,
    pub source:      u32,
    pub hops:        u32,
    /// See [`encode_path`].
    pub path:        String,
    pub payload:     f64,
    pub energy_cost: f64,
    pub link_cost:   f64,
}

impl From<&TransmissionRecord> for TransmissionRow {
    fn from(r: &TransmissionRecord) -> Self {
        Self {
            round:       r.round.0,
            source:      r.source.0,
            hops:        r.hop_count() as u32,
            path:        encode_path(&r.path),
            payload:     r.payload,
            energy_cost: r.energy_cost,
            link_cost:   r.link_cost,
        }
    }
}

/// Aggregates for one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundSummaryRow {
    pub round:               u64,
    pub alive_nodes:         u64,
    pub transmissions:       u64,
    pub unreachable:         u64,
    pub insufficient_energy: u64,
    pub deaths:              u64,
    pub energy_harvested:    f64,
    pub energy_consumed:     f64,
    pub data_collected:      f64,
}

impl From<&RoundSummary> for RoundSummaryRow {
    fn from(s: &RoundSummary) -> Self {
        Self {
            round:               s.round.0,
            alive_nodes:         s.alive_nodes as u64,
            transmissions:       s.transmissions as u64,
            unreachable:         s.unreachable as u64,
            insufficient_energy: s.insufficient_energy as u64,
            deaths:              s.deaths as u64,
            energy_harvested:    s.energy_harvested,
            energy_consumed:     s.energy_consumed,
            data_collected:      s.data_collected,
        }
    }
}
