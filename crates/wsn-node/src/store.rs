//! Node storage: `NodeSet` (state) and `NodeRngs` (per-node RNG).
//!
//! # Why two structs?
//!
//! A round needs `&mut NodeRngs` (each node's RNG for its harvest and
//! collection draws) while also mutating `NodeSet`, and routing needs `&NodeSet`
//! snapshots in between.  Keeping the RNGs outside `NodeSet` lets both be
//! borrowed independently without cloning either.

use wsn_core::{NodeId, NodeRng};

use crate::{BaseStation, SensorNode};

// ── NodeRngs ──────────────────────────────────────────────────────────────────

/// Per-node deterministic RNG state, indexed by `NodeId`.
pub struct NodeRngs {
    pub inner: Vec<NodeRng>,
}

impl NodeRngs {
    /// Allocate and seed `count` per-node RNGs from `global_seed`.
    pub(crate) fn new(count: usize, global_seed: u64) -> Self {
        let inner = (0..count as u32)
            .map(|i| NodeRng::new(global_seed, NodeId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one node's RNG.
    #[inline]
    pub fn get_mut(&mut self, node: NodeId) -> &mut NodeRng {
        &mut self.inner[node.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

// ── NodeSet ───────────────────────────────────────────────────────────────────

/// Every sensor node of the run plus the base station.
///
/// `nodes[i].id == NodeId(i)` always holds; nodes are never removed, death is
/// a state of the node.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeSet {
    pub nodes:        Vec<SensorNode>,
    pub base_station: BaseStation,
}

impl NodeSet {
    pub(crate) fn new(nodes: Vec<SensorNode>, base_station: BaseStation) -> Self {
        debug_assert!(nodes.iter().enumerate().all(|(i, n)| n.id.index() == i));
        Self { nodes, base_station }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> Option<&SensorNode> {
        self.nodes.get(id.index())
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut SensorNode> {
        self.nodes.get_mut(id.index())
    }

    /// All node IDs in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|n| n.id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SensorNode> {
        self.nodes.iter()
    }

    pub fn alive_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_alive()).count()
    }

    /// Sum of energy over all sensor nodes (the base station is excluded).
    pub fn total_energy(&self) -> f64 {
        self.nodes.iter().map(SensorNode::energy).sum()
    }
}
