//! The `Sim` struct and its round loop.

use std::time::{Duration, Instant};

use log::{debug, info, warn};
use wsn_core::{Hop, Interval, NodeId, Point, Round, SimConfig, SimRng};
use wsn_node::{NodeRngs, NodeSet, transmission_cost};
use wsn_routing::{CostModel, Endpoint, Router, RoutingGraph};

use crate::{
    DataPipeline, EnergyHistory, RoundSummary, SimError, SimObserver, SimReport, SimResult,
    SkipReason, TransmissionRecord,
};

/// The main simulation runner.
///
/// `Sim<C, R, P>` holds all simulation state and drives the round loop.
/// Within a round nodes are processed strictly in ascending `NodeId` order,
/// and each routing query sees the energies left by every node processed
/// before it:
///
/// 1. **Harvest**: add a sample from `config.harvest`.
/// 2. **Collect**: draw a sample from `config.collect`.
/// 3. **Deliver** (only if data was collected): run the [`DataPipeline`],
///    build the routing graph from current energies, ask the [`Router`] for
///    the cheapest path to the base station and transmit along it.
/// 4. **Death check**: energy below `config.death_threshold` drops to 0.
/// 5. **Record** the node's energy.
///
/// After all nodes, live nodes are moved to uniform random positions when
/// `config.reposition` is set.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim<C: CostModel, R: Router, P: DataPipeline> {
    /// Global configuration (rounds, seed, threshold, …).
    pub config: SimConfig,

    /// Next round to run; equals the number of completed rounds.
    pub round: Round,

    /// Node state, mutated in place every round.
    pub nodes: NodeSet,

    /// Per-node deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: NodeRngs,

    pub(crate) sim_rng:       SimRng,
    pub(crate) cost:          C,
    pub(crate) router:        R,
    pub(crate) pipeline:      P,
    pub(crate) deadline:      Option<Duration>,
    pub(crate) history:       EnergyHistory,
    pub(crate) transmissions: Vec<TransmissionRecord>,
    pub(crate) summaries:     Vec<RoundSummary>,
}

impl<C: CostModel, R: Router, P: DataPipeline> Sim<C, R, P> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run the simulation from the current round to `config.rounds`.
    ///
    /// Calls observer hooks at every round boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    ///
    /// Fails with [`SimError::DeadlineExceeded`] if a deadline was set and
    /// has passed before a round starts; records of completed rounds are
    /// kept.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        info!(
            "running {} rounds over {} nodes (seed {})",
            self.config.rounds.saturating_sub(self.round.0),
            self.nodes.len(),
            self.config.seed
        );
        let started = Instant::now();
        while self.round.0 < self.config.rounds {
            self.check_deadline(started)?;
            self.step(observer)?;
        }
        info!(
            "run finished at {}: {} of {} nodes alive, {} transmissions",
            self.round,
            self.nodes.alive_count(),
            self.nodes.len(),
            self.transmissions.len()
        );
        observer.on_sim_end(self.round, &self.nodes);
        Ok(())
    }

    /// Run exactly `n` rounds from the current position (ignores
    /// `config.rounds`).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_rounds<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        let started = Instant::now();
        for _ in 0..n {
            self.check_deadline(started)?;
            self.step(observer)?;
        }
        Ok(())
    }

    /// Complete graph over the current node states and the base station.
    pub fn routing_graph(&self) -> RoutingGraph {
        let endpoints: Vec<Endpoint> = self
            .nodes
            .iter()
            .map(|n| Endpoint::new(Hop::Node(n.id), n.position, n.energy()))
            .collect();
        let bs = &self.nodes.base_station;
        let base = Endpoint::new(Hop::BaseStation, bs.position, bs.energy());
        RoutingGraph::build(&endpoints, &base, &self.cost, self.config.sink_edges)
    }

    pub fn history(&self) -> &EnergyHistory {
        &self.history
    }

    pub fn transmissions(&self) -> &[TransmissionRecord] {
        &self.transmissions
    }

    pub fn summaries(&self) -> &[RoundSummary] {
        &self.summaries
    }

    /// Snapshot of everything recorded so far.
    pub fn report(&self) -> SimReport {
        SimReport {
            rounds_completed: self.round.0,
            energy_history:   self.history.clone(),
            transmissions:    self.transmissions.clone(),
            summaries:        self.summaries.clone(),
            final_status:     SimReport::final_status(&self.nodes),
        }
    }

    /// Consume the sim, moving its records into a [`SimReport`].
    pub fn into_report(self) -> SimReport {
        SimReport {
            rounds_completed: self.round.0,
            final_status:     SimReport::final_status(&self.nodes),
            energy_history:   self.history,
            transmissions:    self.transmissions,
            summaries:        self.summaries,
        }
    }

    // ── Core round processing ─────────────────────────────────────────────

    fn check_deadline(&self, started: Instant) -> SimResult<()> {
        match self.deadline {
            Some(limit) if started.elapsed() >= limit => {
                warn!("deadline of {limit:?} exceeded after {} rounds", self.round.0);
                Err(SimError::DeadlineExceeded { completed_rounds: self.round.0 })
            }
            _ => Ok(()),
        }
    }

    fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let now = self.round;
        observer.on_round_start(now);
        let summary = self.process_round(now, observer)?;
        info!(
            "{now}: {} alive, {} sent, {} unreachable, {} underpowered, {} died",
            summary.alive_nodes,
            summary.transmissions,
            summary.unreachable,
            summary.insufficient_energy,
            summary.deaths
        );
        observer.on_round_end(&summary, &self.nodes);
        self.summaries.push(summary);
        self.round = now.next();
        Ok(())
    }

    fn process_round<O: SimObserver>(&mut self, now: Round, observer: &mut O) -> SimResult<RoundSummary> {
        let mut summary = RoundSummary::new(now);
        let threshold = self.config.death_threshold;

        for idx in 0..self.nodes.len() {
            let id = NodeId(idx as u32);
            let node = &mut self.nodes.nodes[idx];
            if node.is_dead() {
                self.history.push(id, node.energy());
                continue;
            }

            let rng = self.rngs.get_mut(id);
            summary.energy_harvested += node.harvest_energy(rng, &self.config.harvest);
            let data = node.collect_data(rng, &self.config.collect);
            summary.data_collected += data;

            if data > 0.0 {
                self.deliver(now, id, data, &mut summary, observer)?;
            }

            let node = &mut self.nodes.nodes[idx];
            node.apply_death_check(threshold);
            if node.is_dead() {
                summary.deaths += 1;
                debug!("{id} died in {now}");
                observer.on_node_death(now, id);
            }
            self.history.push(id, node.energy());
        }

        if self.config.reposition {
            self.reposition();
        }
        summary.alive_nodes = self.nodes.alive_count();
        Ok(summary)
    }

    /// Route and transmit `data` collected by `id` this round.
    fn deliver<O: SimObserver>(
        &mut self,
        now:      Round,
        id:       NodeId,
        data:     f64,
        summary:  &mut RoundSummary,
        observer: &mut O,
    ) -> SimResult<()> {
        let payload = sanitize_payload(id, self.pipeline.encrypt(self.pipeline.process(data)));

        let graph = self.routing_graph();
        let Some(route) = self.router.route_to_sink(&graph, id)? else {
            summary.unreachable += 1;
            debug!("{id} has no route to the base station");
            observer.on_transmission_skipped(now, id, SkipReason::Unreachable);
            return Ok(());
        };

        let energy_cost = transmission_cost(payload, &route.hops);
        let node = &mut self.nodes.nodes[id.index()];
        let available = node.energy();
        if !node.transmit(payload, &route.hops) {
            summary.insufficient_energy += 1;
            observer.on_transmission_skipped(
                now,
                id,
                SkipReason::InsufficientEnergy { required: energy_cost, available },
            );
            return Ok(());
        }
        if self.config.drain_data_on_transmit {
            node.drain_data(data);
        }

        let record = TransmissionRecord {
            round: now,
            source: id,
            payload,
            energy_cost,
            link_cost: route.cost,
            path: route.hops,
        };
        debug!(
            "{id} sent {payload:.2} over {} hops for {energy_cost:.2} energy",
            record.hop_count()
        );
        summary.transmissions += 1;
        summary.energy_consumed += energy_cost;
        observer.on_transmission(&record);
        self.transmissions.push(record);
        Ok(())
    }

    /// Move every live node to a uniform position inside `config.bounds`.
    fn reposition(&mut self) {
        let bounds = self.config.bounds;
        let xs = Interval::new(bounds.min.x, bounds.max.x);
        let ys = Interval::new(bounds.min.y, bounds.max.y);
        for node in self.nodes.nodes.iter_mut().filter(|n| n.is_alive()) {
            let x = xs.sample_sim(&mut self.sim_rng);
            let y = ys.sample_sim(&mut self.sim_rng);
            node.position = Point::new(x, y);
        }
    }
}

/// Negative and NaN pipeline output becomes an empty payload.
fn sanitize_payload(node: NodeId, payload: f64) -> f64 {
    if payload.is_nan() || payload < 0.0 {
        warn!("{node}: pipeline produced payload {payload}, sending 0 instead");
        return 0.0;
    }
    payload
}
