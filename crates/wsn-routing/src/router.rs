//! Routing trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `wsn-sim` calls routing via the [`Router`] trait, so applications can swap
//! in another search strategy without touching the simulation loop.  The
//! default [`DijkstraRouter`] is exact for the non-negative weights every
//! [`CostModel`][crate::CostModel] produces.
//!
//! # Unreachable sink
//!
//! When every path to the base station weighs `+∞` (all relays dead and the
//! direct edge unusable) [`Router::route_to_sink`] returns `Ok(None)`.  That
//! is an expected outcome, not an error.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use wsn_core::{Hop, NodeId};

use crate::{RoutingError, RoutingGraph, RoutingResult};

// ── Route ─────────────────────────────────────────────────────────────────────

/// A source-to-destination path and its accumulated link cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    /// Every vertex on the path, source first, destination last.
    pub hops: Vec<Hop>,
    /// Sum of edge weights along `hops`.
    pub cost: f64,
}

impl Route {
    /// Number of edges traversed.
    #[inline]
    pub fn hop_count(&self) -> usize {
        self.hops.len().saturating_sub(1)
    }
}

// ── ShortestPaths ─────────────────────────────────────────────────────────────

/// Single-source shortest-path tree.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: usize,
    hops:   Vec<Hop>,
    dist:   Vec<f64>,
    prev:   Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Same vertex layout as [`RoutingGraph::vertex_of`].
    fn index_of(&self, hop: Hop) -> Option<usize> {
        let base = self.hops.len() - 1;
        match hop {
            Hop::BaseStation => Some(base),
            Hop::Node(id) => (id.index() < base).then_some(id.index()),
        }
    }

    pub fn source(&self) -> Hop {
        self.hops[self.source]
    }

    /// Accumulated cost to `target`: `+∞` if unreachable, `None` if `target`
    /// is not in the graph.
    pub fn distance(&self, target: Hop) -> Option<f64> {
        self.index_of(target).map(|v| self.dist[v])
    }

    #[inline]
    pub fn is_reachable(&self, target: Hop) -> bool {
        self.distance(target).is_some_and(f64::is_finite)
    }

    /// Vertices from the source up to, but excluding, `target`.
    ///
    /// `Some(vec![])` for the source itself; `None` if `target` is
    /// unreachable or unknown.
    pub fn predecessors(&self, target: Hop) -> Option<Vec<Hop>> {
        let v = self.index_of(target)?;
        if !self.dist[v].is_finite() {
            return None;
        }
        let mut chain = Vec::new();
        let mut cur = self.prev[v];
        while let Some(u) = cur {
            chain.push(self.hops[u]);
            cur = self.prev[u];
        }
        chain.reverse();
        Some(chain)
    }

    /// Full path to `target` (source and target included).
    pub fn path_to(&self, target: Hop) -> Option<Route> {
        let mut hops = self.predecessors(target)?;
        hops.push(target);
        let cost = self.distance(target)?;
        Some(Route { hops, cost })
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// Implementations must be `Send + Sync` so one router can serve several
/// worker threads.
pub trait Router: Send + Sync {
    /// Shortest paths from `source` to every vertex of `graph`.
    fn shortest_paths(&self, graph: &RoutingGraph, source: Hop) -> RoutingResult<ShortestPaths>;

    /// Cheapest route from sensor `source` to the base station, or `None` if
    /// the base station cannot be reached.
    fn route_to_sink(&self, graph: &RoutingGraph, source: NodeId) -> RoutingResult<Option<Route>> {
        let tree = self.shortest_paths(graph, Hop::Node(source))?;
        Ok(tree.path_to(Hop::BaseStation))
    }
}

impl<R: Router + ?Sized> Router for &R {
    fn shortest_paths(&self, graph: &RoutingGraph, source: Hop) -> RoutingResult<ShortestPaths> {
        (**self).shortest_paths(graph, source)
    }
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra's algorithm with a binary-heap priority queue.
///
/// Equal-cost queue entries pop in insertion order.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn shortest_paths(&self, graph: &RoutingGraph, source: Hop) -> RoutingResult<ShortestPaths> {
        dijkstra(graph, source)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap entry ordered so that `BinaryHeap` (a max-heap) pops the lowest cost
/// first, then the earliest insertion.
#[derive(Copy, Clone, Debug)]
struct QueueEntry {
    cost:   f64,
    seq:    u64,
    vertex: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

fn dijkstra(graph: &RoutingGraph, source: Hop) -> RoutingResult<ShortestPaths> {
    let src = graph
        .vertex_of(source)
        .ok_or(RoutingError::UnknownVertex(source))?;

    let n = graph.vertex_count();
    // dist[v] = best known cost to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = vertex that reached v on the best known path.
    let mut prev    = vec![None; n];
    let mut visited = vec![false; n];

    dist[src] = 0.0;

    let mut seq = 0u64;
    let mut heap = BinaryHeap::new();
    heap.push(QueueEntry { cost: 0.0, seq, vertex: src });

    while let Some(QueueEntry { cost, vertex, .. }) = heap.pop() {
        // Stale entry for an already-settled vertex.
        if visited[vertex] {
            continue;
        }
        visited[vertex] = true;

        for edge in graph.out_edges(vertex) {
            if visited[edge.to] {
                continue;
            }
            // `+∞` and NaN weights never compare as shorter.
            let candidate = cost + edge.weight;
            if candidate < dist[edge.to] {
                dist[edge.to] = candidate;
                prev[edge.to] = Some(vertex);
                seq += 1;
                heap.push(QueueEntry { cost: candidate, seq, vertex: edge.to });
            }
        }
    }

    Ok(ShortestPaths {
        source: src,
        hops: graph.hops().to_vec(),
        dist,
        prev,
    })
}
