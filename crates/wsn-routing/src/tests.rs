//! Unit tests for wsn-routing.
//!
//! All tests build endpoint snapshots by hand; no simulation is involved.

#[cfg(test)]
mod helpers {
    use wsn_core::{Hop, NodeId, Point, SinkEdges};

    use crate::{CostModel, Endpoint, EnergyAwareCost, RoutingGraph};

    pub fn endpoints(nodes: &[((f64, f64), f64)]) -> Vec<Endpoint> {
        nodes
            .iter()
            .enumerate()
            .map(|(i, &(pos, energy))| {
                Endpoint::new(Hop::Node(NodeId(i as u32)), Point::from(pos), energy)
            })
            .collect()
    }

    pub fn base(x: f64, y: f64) -> Endpoint {
        Endpoint::new(Hop::BaseStation, Point::new(x, y), f64::INFINITY)
    }

    pub fn energy_graph(nodes: &[((f64, f64), f64)], bs: (f64, f64)) -> RoutingGraph {
        RoutingGraph::build(&endpoints(nodes), &base(bs.0, bs.1), &EnergyAwareCost, SinkEdges::Inbound)
    }

    /// Energy-aware cost, but links longer than `radius` are unusable.
    pub struct RangeLimited {
        pub radius: f64,
    }

    impl CostModel for RangeLimited {
        fn edge_cost(&self, a: &Endpoint, b: &Endpoint) -> f64 {
            if a.position.distance(b.position) > self.radius {
                return f64::INFINITY;
            }
            EnergyAwareCost.edge_cost(a, b)
        }
    }

    pub fn node(i: u32) -> Hop {
        Hop::Node(NodeId(i))
    }
}

// ── Cost models ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod cost {
    use wsn_core::{Hop, Interval, NodeId, Point};

    use super::helpers::{base, endpoints};
    use crate::{CostModel, Endpoint, EnergyAwareCost, UniformDistanceCost};

    #[test]
    fn distance_over_min_energy() {
        let e = endpoints(&[((0.0, 0.0), 10.0), ((3.0, 4.0), 2.5)]);
        assert_eq!(EnergyAwareCost.edge_cost(&e[0], &e[1]), 5.0 / 2.5);
    }

    #[test]
    fn symmetric() {
        let e = endpoints(&[((0.3, 7.1), 3.0), ((9.2, 1.4), 11.0)]);
        assert_eq!(
            EnergyAwareCost.edge_cost(&e[0], &e[1]),
            EnergyAwareCost.edge_cost(&e[1], &e[0]),
        );
    }

    #[test]
    fn strictly_decreasing_in_min_energy() {
        let mut prev = f64::INFINITY;
        for energy in [0.5, 1.0, 2.0, 5.0, 10.0, 40.0] {
            let e = endpoints(&[((0.0, 0.0), energy), ((2.0, 0.0), 100.0)]);
            let c = EnergyAwareCost.edge_cost(&e[0], &e[1]);
            assert!(c < prev, "cost {c} at energy {energy} not below {prev}");
            prev = c;
        }
    }

    #[test]
    fn infinite_when_either_endpoint_is_dead() {
        let e = endpoints(&[((0.0, 0.0), 0.0), ((1.0, 0.0), 10.0)]);
        assert!(EnergyAwareCost.edge_cost(&e[0], &e[1]).is_infinite());
        assert!(EnergyAwareCost.edge_cost(&e[1], &e[0]).is_infinite());
        assert!(EnergyAwareCost.edge_cost(&e[0], &base(5.0, 5.0)).is_infinite());
    }

    #[test]
    fn base_station_divides_by_node_energy() {
        let e = endpoints(&[((0.0, 0.0), 4.0)]);
        assert_eq!(EnergyAwareCost.edge_cost(&e[0], &base(8.0, 0.0)), 2.0);
    }

    #[test]
    fn uniform_cost_in_range_symmetric_and_stable() {
        let model = UniformDistanceCost::new(Interval::new(10.0, 50.0), 99);
        let e = endpoints(&[((0.0, 0.0), 3.0), ((9.0, 9.0), 8.0), ((1.0, 5.0), 1.0)]);
        for a in &e {
            for b in &e {
                if a.hop == b.hop {
                    continue;
                }
                let c = model.edge_cost(a, b);
                assert!(model.range.contains(c));
                assert_eq!(c, model.edge_cost(b, a));
                assert_eq!(c, model.edge_cost(a, b));
            }
        }
    }

    #[test]
    fn uniform_cost_ignores_energy_level_but_not_death() {
        let model = UniformDistanceCost::aco(5);
        let a = Endpoint::new(Hop::Node(NodeId(0)), Point::new(0.0, 0.0), 1.0);
        let rich = Endpoint::new(Hop::Node(NodeId(1)), Point::new(1.0, 0.0), 100.0);
        let poor = Endpoint { energy: 0.5, ..rich };
        let dead = Endpoint { energy: 0.0, ..rich };
        assert_eq!(model.edge_cost(&a, &rich), model.edge_cost(&a, &poor));
        assert!(model.edge_cost(&a, &dead).is_infinite());
    }

    #[test]
    fn presets() {
        assert_eq!(UniformDistanceCost::aco(0).range, Interval::new(10.0, 50.0));
        assert_eq!(UniformDistanceCost::ga(0).range, Interval::new(15.0, 45.0));
    }
}

// ── Graph structure ───────────────────────────────────────────────────────────

#[cfg(test)]
mod graph {
    use wsn_core::{Hop, SinkEdges};

    use super::helpers::{base, endpoints, energy_graph, node};
    use crate::{EnergyAwareCost, RoutingGraph};

    #[test]
    fn complete_graph_counts() {
        let g = energy_graph(
            &[((0.0, 0.0), 5.0), ((1.0, 0.0), 5.0), ((2.0, 0.0), 5.0), ((3.0, 0.0), 5.0)],
            (5.0, 5.0),
        );
        assert_eq!(g.vertex_count(), 5);
        // n(n-1) node edges + n edges into the sink.
        assert_eq!(g.edge_count(), 4 * 3 + 4);
        assert_eq!(g.base_station_vertex(), 4);
        assert!(g.out_edges(g.base_station_vertex()).is_empty());
    }

    #[test]
    fn sink_edges_are_one_way_by_default() {
        let g = energy_graph(&[((0.0, 0.0), 5.0)], (3.0, 4.0));
        assert_eq!(g.weight(node(0), Hop::BaseStation), Some(1.0));
        assert_eq!(g.weight(Hop::BaseStation, node(0)), None);
    }

    #[test]
    fn bidirectional_sink_mirrors_weights() {
        let g = RoutingGraph::build(
            &endpoints(&[((0.0, 0.0), 5.0), ((6.0, 8.0), 2.0)]),
            &base(3.0, 4.0),
            &EnergyAwareCost,
            SinkEdges::Bidirectional,
        );
        assert_eq!(g.edge_count(), 2 + 2 + 2);
        for i in 0..2 {
            assert_eq!(
                g.weight(Hop::BaseStation, node(i)),
                g.weight(node(i), Hop::BaseStation),
            );
        }
    }

    #[test]
    fn node_edges_are_symmetric() {
        let g = energy_graph(
            &[((0.0, 0.0), 5.0), ((1.0, 7.0), 9.0), ((4.0, 2.0), 1.5)],
            (5.0, 5.0),
        );
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(g.weight(node(i), node(j)), g.weight(node(j), node(i)));
                }
            }
        }
    }

    #[test]
    fn dead_node_stays_with_infinite_edges() {
        let g = energy_graph(&[((0.0, 0.0), 5.0), ((1.0, 0.0), 0.0)], (5.0, 5.0));
        assert_eq!(g.vertex_count(), 3);
        for e in g.out_edges(1) {
            assert!(e.weight.is_infinite());
        }
        assert!(g.weight(node(0), node(1)).unwrap().is_infinite());
        assert!(g.weight(node(0), Hop::BaseStation).unwrap().is_finite());
    }

    #[test]
    fn vertex_lookup() {
        let g = energy_graph(&[((0.0, 0.0), 5.0)], (5.0, 5.0));
        assert_eq!(g.vertex_of(node(0)), Some(0));
        assert_eq!(g.vertex_of(Hop::BaseStation), Some(1));
        assert_eq!(g.vertex_of(node(1)), None);
        assert_eq!(g.hop(1), Hop::BaseStation);
    }

    #[test]
    fn empty_network_has_only_the_sink() {
        let g = energy_graph(&[], (5.0, 5.0));
        assert_eq!(g.vertex_count(), 1);
        assert_eq!(g.edge_count(), 0);
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod dijkstra {
    use wsn_core::{Hop, NodeId, SinkEdges};

    use super::helpers::{RangeLimited, base, endpoints, energy_graph, node};
    use crate::{CostModel, DijkstraRouter, EnergyAwareCost, Router, RoutingError, RoutingGraph};

    #[test]
    fn collinear_chain_versus_direct() {
        // Three nodes on a line, base station further along the same line.
        let nodes = [((0.0, 0.0), 20.0), ((1.0, 0.0), 20.0), ((2.0, 0.0), 20.0)];
        let ends = endpoints(&nodes);
        let bs = base(5.0, 0.0);
        let c = EnergyAwareCost;

        let direct = c.edge_cost(&ends[0], &bs);
        let chain = c.edge_cost(&ends[0], &ends[1])
            + c.edge_cost(&ends[1], &ends[2])
            + c.edge_cost(&ends[2], &bs);

        let g = energy_graph(&nodes, (5.0, 0.0));
        let route = DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().unwrap();

        let best = direct.min(chain);
        assert!(route.cost <= best + 1e-12, "route {} vs best {best}", route.cost);
        if chain < direct {
            assert_eq!(route.hops, [node(0), node(1), node(2), Hop::BaseStation]);
        } else if direct < chain {
            assert_eq!(route.hops, [node(0), Hop::BaseStation]);
        }
        assert_eq!(route.hops.first(), Some(&node(0)));
        assert_eq!(route.hops.last(), Some(&Hop::BaseStation));
    }

    #[test]
    fn weak_source_prefers_energetic_relay() {
        // direct: 5 / 2 = 2.5; via node 1: √2/2 + √17/20 ≈ 0.91
        let g = energy_graph(&[((0.0, 0.0), 2.0), ((1.0, 1.0), 20.0)], (5.0, 0.0));
        let route = DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().unwrap();
        assert_eq!(route.hops, [node(0), node(1), Hop::BaseStation]);
        assert_eq!(route.hop_count(), 2);
        let expected = 2f64.sqrt() / 2.0 + 17f64.sqrt() / 20.0;
        assert!((route.cost - expected).abs() < 1e-12);
    }

    #[test]
    fn weak_relay_is_avoided() {
        // direct: 5 / 20 = 0.25; via node 1: √2/1 alone exceeds that.
        let g = energy_graph(&[((0.0, 0.0), 20.0), ((1.0, 1.0), 1.0)], (5.0, 0.0));
        let route = DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().unwrap();
        assert_eq!(route.hops, [node(0), Hop::BaseStation]);
        assert_eq!(route.cost, 0.25);
    }

    #[test]
    fn dead_relay_never_used() {
        let g = energy_graph(&[((0.0, 0.0), 0.5), ((0.1, 0.0), 0.0)], (5.0, 0.0));
        let route = DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().unwrap();
        assert_eq!(route.hops, [node(0), Hop::BaseStation]);
    }

    #[test]
    fn dead_source_cannot_reach_sink() {
        let g = energy_graph(&[((0.0, 0.0), 0.0), ((1.0, 0.0), 10.0)], (5.0, 0.0));
        assert!(DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().is_none());
    }

    #[test]
    fn out_of_range_sink_is_unreachable() {
        let g = RoutingGraph::build(
            &endpoints(&[((0.0, 0.0), 10.0), ((1.0, 0.0), 10.0)]),
            &base(9.0, 0.0),
            &RangeLimited { radius: 2.0 },
            SinkEdges::Inbound,
        );
        assert!(DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().is_none());
        let tree = DijkstraRouter.shortest_paths(&g, node(0)).unwrap();
        assert!(!tree.is_reachable(Hop::BaseStation));
        assert_eq!(tree.predecessors(Hop::BaseStation), None);
        assert!(tree.is_reachable(node(1)));
    }

    #[test]
    fn multi_hop_under_range_limit() {
        // Only neighbours within 2.5 units can talk: 0 → 1 → 2 → sink.
        let g = RoutingGraph::build(
            &endpoints(&[((0.0, 0.0), 10.0), ((2.0, 0.0), 10.0), ((4.0, 0.0), 10.0)]),
            &base(6.0, 0.0),
            &RangeLimited { radius: 2.5 },
            SinkEdges::Inbound,
        );
        let route = DijkstraRouter.route_to_sink(&g, NodeId(0)).unwrap().unwrap();
        assert_eq!(route.hops, [node(0), node(1), node(2), Hop::BaseStation]);
        assert_eq!(route.hop_count(), 3);
        assert!((route.cost - 0.6).abs() < 1e-12);
    }

    #[test]
    fn predecessors_exclude_target() {
        let g = energy_graph(&[((0.0, 0.0), 2.0), ((1.0, 1.0), 20.0)], (5.0, 0.0));
        let tree = DijkstraRouter.shortest_paths(&g, node(0)).unwrap();
        assert_eq!(tree.source(), node(0));
        assert_eq!(tree.predecessors(Hop::BaseStation), Some(vec![node(0), node(1)]));
        assert_eq!(tree.predecessors(node(0)), Some(vec![]));
        assert_eq!(tree.distance(node(0)), Some(0.0));
        assert_eq!(tree.distance(node(5)), None);
    }

    #[test]
    fn base_station_relays_only_when_bidirectional() {
        let nodes = endpoints(&[((0.0, 0.0), 10.0), ((9.0, 0.0), 10.0)]);
        let bs = base(4.5, 0.0);

        let inbound = RoutingGraph::build(&nodes, &bs, &EnergyAwareCost, SinkEdges::Inbound);
        let tree = DijkstraRouter.shortest_paths(&inbound, Hop::BaseStation).unwrap();
        assert!(!tree.is_reachable(node(0)));

        let both = RoutingGraph::build(&nodes, &bs, &EnergyAwareCost, SinkEdges::Bidirectional);
        let tree = DijkstraRouter.shortest_paths(&both, Hop::BaseStation).unwrap();
        assert!(tree.is_reachable(node(0)));
        assert!(tree.is_reachable(node(1)));
    }

    #[test]
    fn unknown_source_errors() {
        let g = energy_graph(&[((0.0, 0.0), 2.0)], (5.0, 0.0));
        let err = DijkstraRouter.route_to_sink(&g, NodeId(3)).unwrap_err();
        assert!(matches!(err, RoutingError::UnknownVertex(Hop::Node(NodeId(3)))));
    }
}

// ── Optimality against brute force ────────────────────────────────────────────

#[cfg(test)]
mod brute_force {
    use wsn_core::{Hop, NodeId, SimRng, SinkEdges};

    use super::helpers::{base, endpoints};
    use crate::{DijkstraRouter, EnergyAwareCost, Router, RoutingGraph};

    /// Minimum cost over every simple path from `from` to the sink.
    fn brute_min(g: &RoutingGraph, from: usize) -> f64 {
        fn dfs(g: &RoutingGraph, v: usize, acc: f64, seen: &mut Vec<bool>, best: &mut f64) {
            if v == g.base_station_vertex() {
                *best = best.min(acc);
                return;
            }
            for e in g.out_edges(v) {
                if !seen[e.to] && e.weight.is_finite() {
                    seen[e.to] = true;
                    dfs(g, e.to, acc + e.weight, seen, best);
                    seen[e.to] = false;
                }
            }
        }
        let mut seen = vec![false; g.vertex_count()];
        seen[from] = true;
        let mut best = f64::INFINITY;
        dfs(g, from, 0.0, &mut seen, &mut best);
        best
    }

    #[test]
    fn matches_exhaustive_search_on_small_graphs() {
        let mut rng = SimRng::new(2024);
        for _ in 0..200 {
            let n = rng.gen_range(1..=5usize);
            let nodes: Vec<_> = (0..n)
                .map(|_| {
                    let pos = (rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
                    let energy = if rng.gen_range(0..6) == 0 { 0.0 } else { rng.gen_range(0.5..20.0) };
                    (pos, energy)
                })
                .collect();
            let bs = base(rng.gen_range(0.0..10.0), rng.gen_range(0.0..10.0));
            let g = RoutingGraph::build(&endpoints(&nodes), &bs, &EnergyAwareCost, SinkEdges::Inbound);

            for i in 0..n {
                let expected = brute_min(&g, i);
                let got = DijkstraRouter.route_to_sink(&g, NodeId(i as u32)).unwrap();
                match got {
                    None => assert!(expected.is_infinite()),
                    Some(route) => {
                        assert!(
                            (route.cost - expected).abs() <= 1e-9 * expected.max(1.0),
                            "dijkstra {} vs brute force {expected}",
                            route.cost
                        );
                        // The reported cost is the sum of the path's edges.
                        let summed: f64 = route
                            .hops
                            .windows(2)
                            .map(|w| g.weight(w[0], w[1]).unwrap())
                            .sum();
                        assert!((summed - route.cost).abs() <= 1e-9 * summed.max(1.0));
                        assert_eq!(route.hops.last(), Some(&Hop::BaseStation));
                    }
                }
            }
        }
    }
}
