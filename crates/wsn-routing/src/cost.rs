//! Link-cost models.
//!
//! # Pluggability
//!
//! [`RoutingGraph::build`][crate::RoutingGraph::build] weighs every edge
//! through the [`CostModel`] trait, so the simulation can swap the adaptive
//! energy-aware metric for a fixed generator without touching the router.
//!
//! | Model                  | weight(a, b)                                     |
//! |------------------------|--------------------------------------------------|
//! | [`EnergyAwareCost`]    | `distance(a, b) / min(energy(a), energy(b))`     |
//! | [`UniformDistanceCost`]| pseudo-random distance in a fixed range          |
//!
//! Both return `+∞` whenever either endpoint has no energy, so dead nodes are
//! never usable as relays.

use wsn_core::rng::mix_seed;
use wsn_core::{Hop, Interval, Point, SimRng};

/// A read-only snapshot of one routing-graph vertex.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Endpoint {
    pub hop:      Hop,
    pub position: Point,
    /// `+∞` for the base station.
    pub energy:   f64,
}

impl Endpoint {
    #[inline]
    pub fn new(hop: Hop, position: Point, energy: f64) -> Self {
        Self { hop, position, energy }
    }

    /// `true` when the endpoint cannot carry traffic.
    #[inline]
    pub fn is_depleted(&self) -> bool {
        self.energy.is_nan() || self.energy <= 0.0
    }
}

/// Maps a pair of endpoint states to an edge weight.
///
/// Implementations must be pure and symmetric: the graph computes each row
/// independently (possibly on several threads) and relies on
/// `edge_cost(a, b) == edge_cost(b, a)`.
pub trait CostModel: Send + Sync {
    /// Weight of the link between `a` and `b`; `f64::INFINITY` means unusable.
    fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64;
}

impl<C: CostModel + ?Sized> CostModel for &C {
    #[inline]
    fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64 {
        (**self).edge_cost(a, b)
    }
}

impl<C: CostModel + ?Sized> CostModel for Box<C> {
    #[inline]
    fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64 {
        (**self).edge_cost(a, b)
    }
}

// ── EnergyAwareCost ───────────────────────────────────────────────────────────

/// Distance over the weaker endpoint's energy.
///
/// Links get cheaper as the weaker side gains energy, so shortest-path search
/// drifts toward energy-rich relays.
#[derive(Copy, Clone, Debug, Default)]
pub struct EnergyAwareCost;

impl CostModel for EnergyAwareCost {
    fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64 {
        if a.is_depleted() || b.is_depleted() {
            return f64::INFINITY;
        }
        a.position.distance(b.position) / a.energy.min(b.energy)
    }
}

// ── UniformDistanceCost ───────────────────────────────────────────────────────

/// Non-adaptive cost generator: each unordered pair of vertices gets a fixed
/// pseudo-random "distance" drawn uniformly from `range`.
///
/// The draw is keyed on `(seed, pair)`, so a pair keeps its weight across
/// queries and rounds; only liveness changes the graph.
#[derive(Copy, Clone, Debug)]
pub struct UniformDistanceCost {
    pub range: Interval,
    pub seed:  u64,
}

impl UniformDistanceCost {
    pub fn new(range: Interval, seed: u64) -> Self {
        Self { range, seed }
    }

    /// `[10, 50]`, the "ACO" preset.
    pub fn aco(seed: u64) -> Self {
        Self::new(Interval::new(10.0, 50.0), seed)
    }

    /// `[15, 45]`, the "GA" preset.
    pub fn ga(seed: u64) -> Self {
        Self::new(Interval::new(15.0, 45.0), seed)
    }
}

/// Stable integer key of a hop; the base station sorts last.
#[inline]
fn hop_key(hop: Hop) -> u64 {
    match hop {
        Hop::Node(id)    => id.0 as u64,
        Hop::BaseStation => u64::MAX,
    }
}

impl CostModel for UniformDistanceCost {
    fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64 {
        if a.is_depleted() || b.is_depleted() {
            return f64::INFINITY;
        }
        let (ka, kb) = (hop_key(a.hop), hop_key(b.hop));
        let (lo, hi) = if ka <= kb { (ka, kb) } else { (kb, ka) };
        let mut rng = SimRng::new(mix_seed(mix_seed(self.seed, lo), hi.wrapping_add(1)));
        self.range.sample_sim(&mut rng)
    }
}
