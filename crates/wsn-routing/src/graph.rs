//! Complete routing graph over every node plus the base station.
//!
//! # Layout
//!
//! Vertices `0..n` are the sensor nodes in `NodeId` order; vertex `n` is the
//! base station.  Adjacency lists are stored per vertex:
//!
//! ```text
//! node i   → every other node j (both directions, same weight)
//!          → base station
//! base     → (nothing)                with SinkEdges::Inbound
//!          → every node               with SinkEdges::Bidirectional
//! ```
//!
//! Dead nodes stay in the graph; their incident edges simply weigh `+∞`.
//! The graph holds no state across queries: build a fresh one whenever node
//! energies or positions may have changed.

use wsn_core::{Hop, SinkEdges};

use crate::{CostModel, Endpoint};

/// A directed, weighted edge.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    pub to:     usize,
    pub weight: f64,
}

/// Adjacency-list graph rebuilt for every routing query.
#[derive(Clone, Debug)]
pub struct RoutingGraph {
    hops:      Vec<Hop>,
    adjacency: Vec<Vec<Edge>>,
}

impl RoutingGraph {
    /// Build the complete graph over `nodes` ∪ {`base`}.
    ///
    /// `nodes[i]` must describe `Hop::Node(NodeId(i))`.
    pub fn build<C: CostModel + ?Sized>(
        nodes:      &[Endpoint],
        base:       &Endpoint,
        cost:       &C,
        sink_edges: SinkEdges,
    ) -> Self {
        debug_assert!(
            nodes
                .iter()
                .enumerate()
                .all(|(i, e)| e.hop.node().map(|id| id.index()) == Some(i))
        );
        let n = nodes.len();

        let row = |i: usize| -> Vec<Edge> {
            let from = &nodes[i];
            let mut edges = Vec::with_capacity(n);
            for (j, to) in nodes.iter().enumerate() {
                if j != i {
                    edges.push(Edge { to: j, weight: cost.edge_cost(from, to) });
                }
            }
            edges.push(Edge { to: n, weight: cost.edge_cost(from, base) });
            edges
        };

        #[cfg(not(feature = "parallel"))]
        let mut adjacency: Vec<Vec<Edge>> = (0..n).map(row).collect();

        #[cfg(feature = "parallel")]
        let mut adjacency: Vec<Vec<Edge>> = {
            use rayon::prelude::*;
            (0..n).into_par_iter().map(row).collect()
        };

        let base_row = match sink_edges {
            SinkEdges::Inbound => Vec::new(),
            // Same weight as the node's own edge toward the sink.
            SinkEdges::Bidirectional => adjacency
                .iter()
                .enumerate()
                .map(|(i, edges)| Edge {
                    to:     i,
                    weight: edges.last().map_or(f64::INFINITY, |e| e.weight),
                })
                .collect(),
        };
        adjacency.push(base_row);

        let mut hops: Vec<Hop> = nodes.iter().map(|e| e.hop).collect();
        hops.push(Hop::BaseStation);

        Self { hops, adjacency }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.hops.len()
    }

    /// Number of directed edges, `+∞` ones included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Vertex index of the base station (always the last one).
    #[inline]
    pub fn base_station_vertex(&self) -> usize {
        self.hops.len() - 1
    }

    /// Vertex index of `hop`, if it belongs to this graph.
    pub fn vertex_of(&self, hop: Hop) -> Option<usize> {
        match hop {
            Hop::BaseStation => Some(self.base_station_vertex()),
            Hop::Node(id) => {
                let v = id.index();
                (v < self.base_station_vertex()).then_some(v)
            }
        }
    }

    /// The hop stored at vertex `v`.
    ///
    /// # Panics
    /// Panics if `v >= vertex_count()`.
    #[inline]
    pub fn hop(&self, v: usize) -> Hop {
        self.hops[v]
    }

    /// All hops in vertex order.
    #[inline]
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Outgoing edges of vertex `v`.
    #[inline]
    pub fn out_edges(&self, v: usize) -> &[Edge] {
        &self.adjacency[v]
    }

    /// Weight of the directed edge `from → to`, if the edge exists.
    pub fn weight(&self, from: Hop, to: Hop) -> Option<f64> {
        let u = self.vertex_of(from)?;
        let v = self.vertex_of(to)?;
        self.adjacency[u].iter().find(|e| e.to == v).map(|e| e.weight)
    }
}
