//! Unit tests for wsn-node.

#[cfg(test)]
mod helpers {
    use wsn_core::{Hop, NodeId, Point};

    use crate::SensorNode;

    pub fn node(energy: f64) -> SensorNode {
        SensorNode::new(NodeId(0), Point::new(0.0, 0.0), energy)
    }

    /// `0 → 1 → 2 → base station`: three hops.
    pub fn three_hop_path() -> Vec<Hop> {
        vec![
            Hop::Node(NodeId(0)),
            Hop::Node(NodeId(1)),
            Hop::Node(NodeId(2)),
            Hop::BaseStation,
        ]
    }

    /// `0 → base station`: one hop.
    pub fn direct_path() -> Vec<Hop> {
        vec![Hop::Node(NodeId(0)), Hop::BaseStation]
    }
}

// ── Liveness & construction ───────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle {
    use super::helpers::node;

    #[test]
    fn positive_energy_is_alive() {
        let n = node(0.1);
        assert!(n.is_alive());
        assert_eq!(n.accumulated_data(), 0.0);
    }

    #[test]
    fn zero_energy_is_dead() {
        assert!(node(0.0).is_dead());
    }

    #[test]
    fn negative_energy_floors_to_zero() {
        let n = node(-3.0);
        assert_eq!(n.energy(), 0.0);
        assert!(n.is_dead());
    }
}

// ── Harvest & collect ─────────────────────────────────────────────────────────

#[cfg(test)]
mod harvest_collect {
    use wsn_core::{Interval, NodeId, NodeRng};

    use super::helpers::node;

    #[test]
    fn harvest_adds_sample_within_range() {
        let mut rng = NodeRng::new(3, NodeId(0));
        let range = Interval::new(0.0, 5.0);
        let mut n = node(10.0);
        for _ in 0..100 {
            let before = n.energy();
            let gained = n.harvest_energy(&mut rng, &range);
            assert!(range.contains(gained));
            assert_eq!(n.energy(), before + gained);
        }
    }

    #[test]
    fn harvest_has_no_cap() {
        let mut rng = NodeRng::new(3, NodeId(0));
        let mut n = node(1_000.0);
        n.harvest_energy(&mut rng, &Interval::new(50.0, 50.0));
        assert_eq!(n.energy(), 1_050.0);
    }

    #[test]
    fn dead_node_does_not_harvest() {
        let mut rng = NodeRng::new(3, NodeId(0));
        let mut n = node(0.0);
        assert_eq!(n.harvest_energy(&mut rng, &Interval::new(5.0, 5.0)), 0.0);
        assert!(n.is_dead());
    }

    #[test]
    fn collect_accumulates() {
        let mut rng = NodeRng::new(8, NodeId(0));
        let mut n = node(10.0);
        let a = n.collect_data(&mut rng, &Interval::new(2.0, 2.0));
        let b = n.collect_data(&mut rng, &Interval::new(3.0, 3.0));
        assert_eq!((a, b), (2.0, 3.0));
        assert_eq!(n.accumulated_data(), 5.0);
    }

    #[test]
    fn dead_node_collects_nothing() {
        let mut rng = NodeRng::new(8, NodeId(0));
        let mut n = node(0.0);
        assert_eq!(n.collect_data(&mut rng, &Interval::new(2.0, 2.0)), 0.0);
        assert_eq!(n.accumulated_data(), 0.0);
    }

    #[test]
    fn drain_floors_at_zero() {
        let mut rng = NodeRng::new(8, NodeId(0));
        let mut n = node(10.0);
        n.collect_data(&mut rng, &Interval::new(4.0, 4.0));
        n.drain_data(1.5);
        assert_eq!(n.accumulated_data(), 2.5);
        n.drain_data(100.0);
        assert_eq!(n.accumulated_data(), 0.0);
    }
}

// ── Transmission admission ────────────────────────────────────────────────────

#[cfg(test)]
mod transmit {
    use wsn_core::{Hop, NodeId};

    use super::helpers::{direct_path, node, three_hop_path};
    use crate::{hop_count, transmission_cost};

    #[test]
    fn hop_count_is_edge_count() {
        assert_eq!(hop_count(&three_hop_path()), 3);
        assert_eq!(hop_count(&direct_path()), 1);
        assert_eq!(hop_count(&[Hop::BaseStation]), 0);
        assert_eq!(hop_count(&[]), 0);
    }

    #[test]
    fn cost_formula() {
        assert_eq!(transmission_cost(20.0, &three_hop_path()), 5.0);
        assert_eq!(transmission_cost(0.0, &direct_path()), 1.0);
    }

    #[test]
    fn success_deducts_exact_cost() {
        let mut n = node(20.0);
        assert!(n.transmit(20.0, &three_hop_path()));
        assert_eq!(n.energy(), 20.0 - 5.0);
    }

    #[test]
    fn exact_budget_succeeds_and_kills() {
        let mut n = node(5.0);
        assert!(n.transmit(20.0, &three_hop_path()));
        assert_eq!(n.energy(), 0.0);
        assert!(n.is_dead());
    }

    #[test]
    fn insufficient_energy_leaves_state_unchanged() {
        let mut n = node(4.9);
        assert!(!n.transmit(20.0, &three_hop_path()));
        assert_eq!(n.energy(), 4.9);
        assert!(n.is_alive());
    }

    #[test]
    fn dead_node_never_transmits() {
        let mut n = node(0.0);
        assert!(!n.transmit(0.0, &[Hop::Node(NodeId(0))]));
    }

    #[test]
    fn admission_matches_formula_over_grid() {
        let path = three_hop_path();
        for e in [0.5, 3.0, 3.9, 4.0, 4.1, 7.5, 12.0] {
            for payload in [0.0, 5.0, 9.0, 10.0, 40.0] {
                let mut n = node(e);
                let cost = transmission_cost(payload, &path);
                let ok = n.transmit(payload, &path);
                assert_eq!(ok, e >= cost, "energy {e} payload {payload}");
                let expected = if ok { e - cost } else { e };
                assert_eq!(n.energy(), expected);
            }
        }
    }
}

// ── Death check ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod death {
    use wsn_core::{Hop, NodeId};

    use super::helpers::node;

    #[test]
    fn transmission_then_death_check_kills() {
        // Energy 4, transmission costing 2 → 2 left, below threshold 5.
        let mut n = node(4.0);
        let path = [Hop::Node(NodeId(0)), Hop::Node(NodeId(1)), Hop::BaseStation];
        assert!(n.transmit(0.0, &path));
        assert_eq!(n.energy(), 2.0);
        assert!(n.apply_death_check(5.0));
        assert_eq!(n.energy(), 0.0);
        assert!(n.is_dead());
    }

    #[test]
    fn at_or_above_threshold_survives() {
        let mut n = node(5.0);
        assert!(!n.apply_death_check(5.0));
        assert_eq!(n.energy(), 5.0);
    }

    #[test]
    fn already_dead_is_not_killed_again() {
        let mut n = node(0.0);
        assert!(!n.apply_death_check(5.0));
    }

    #[test]
    fn zero_threshold_never_fires() {
        let mut n = node(0.001);
        assert!(!n.apply_death_check(0.0));
        assert!(n.is_alive());
    }
}

// ── Builder & store ───────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use wsn_core::{NodeId, Point, WsnError};

    use crate::NodeSetBuilder;

    #[test]
    fn ids_follow_insertion_order() {
        let (set, rngs) = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .node(Point::new(0.0, 0.0), 10.0)
            .node(Point::new(1.0, 0.0), 0.0)
            .node(Point::new(2.0, 0.0), 7.0)
            .build()
            .unwrap();
        assert_eq!(set.len(), 3);
        assert_eq!(rngs.len(), 3);
        let ids: Vec<_> = set.ids().collect();
        assert_eq!(ids, [NodeId(0), NodeId(1), NodeId(2)]);
        assert_eq!(set.alive_count(), 2);
        assert_eq!(set.total_energy(), 17.0);
        assert_eq!(set.base_station.position, Point::new(5.0, 5.0));
        assert!(set.base_station.energy().is_infinite());
    }

    #[test]
    fn parallel_vectors() {
        let (set, _) = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .positions([Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .energies([3.0, 4.0])
            .build()
            .unwrap();
        assert_eq!(set.get(NodeId(1)).unwrap().energy(), 4.0);
        assert!(set.get(NodeId(2)).is_none());
    }

    #[test]
    fn count_mismatch_rejected() {
        let result = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .positions([Point::new(0.0, 0.0), Point::new(1.0, 1.0)])
            .energies([3.0])
            .build();
        assert!(matches!(result, Err(WsnError::Config(_))));
    }

    #[test]
    fn negative_energy_rejected() {
        let result = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .node(Point::new(0.0, 0.0), -1.0)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn non_finite_input_rejected() {
        let nan_energy = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .node(Point::new(0.0, 0.0), f64::NAN)
            .build();
        assert!(nan_energy.is_err());

        let inf_pos = NodeSetBuilder::new(Point::new(5.0, 5.0), 1)
            .node(Point::new(f64::INFINITY, 0.0), 1.0)
            .build();
        assert!(inf_pos.is_err());

        let bad_base = NodeSetBuilder::new(Point::new(f64::NAN, 5.0), 1).build();
        assert!(bad_base.is_err());
    }

    #[test]
    fn empty_network_is_allowed() {
        let (set, rngs) = NodeSetBuilder::new(Point::new(5.0, 5.0), 1).build().unwrap();
        assert!(set.is_empty());
        assert!(rngs.is_empty());
    }
}
