//! Fluent builder for constructing a [`Sim`].

use std::time::Duration;

use wsn_core::{Point, SimConfig, SimRng, rng::mix_seed};
use wsn_node::{NodeRngs, NodeSet, NodeSetBuilder};
use wsn_routing::{CostModel, DijkstraRouter, EnergyAwareCost, Router};

use crate::{DataPipeline, EnergyHistory, ProxyPipeline, Sim, SimError, SimResult};

/// Stream key for the repositioning RNG; node streams use their IDs.
const REPOSITION_STREAM: u64 = u64::MAX;

/// Fluent builder for [`Sim<C, R, P>`].
///
/// # Required inputs
///
/// - [`SimConfig`]: rounds, seed, death threshold, sampling ranges, …
/// - [`NodeSet`] + [`NodeRngs`]: from [`wsn_node::NodeSetBuilder`]
/// - `C: CostModel`: link cost (e.g. [`EnergyAwareCost`])
/// - `R: Router`: the routing algorithm (e.g. [`DijkstraRouter`])
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                    |
/// |--------------------|----------------------------|
/// | `.pipeline(p)`     | [`ProxyPipeline::default`] |
/// | `.deadline(d)`     | none                       |
///
/// # Example
///
/// ```rust,ignore
/// let (nodes, rngs) = NodeSetBuilder::new(base, config.seed)
///     .positions(positions)
///     .energies(energies)
///     .build()?;
/// let mut sim = SimBuilder::new(config, nodes, rngs, EnergyAwareCost, DijkstraRouter)
///     .deadline(Duration::from_secs(30))
///     .build()?;
/// sim.run(&mut NoopObserver)?;
/// ```
pub struct SimBuilder<C: CostModel, R: Router, P: DataPipeline = ProxyPipeline> {
    config:   SimConfig,
    nodes:    NodeSet,
    rngs:     NodeRngs,
    cost:     C,
    router:   R,
    pipeline: P,
    deadline: Option<Duration>,
}

impl SimBuilder<EnergyAwareCost, DijkstraRouter, ProxyPipeline> {
    /// Build the node set from raw inputs and select the energy-aware model.
    ///
    /// Per-node RNGs are seeded from `config.seed`.  Fails if `positions` and
    /// `energies` differ in length or hold invalid values.
    pub fn from_inputs(
        config:       SimConfig,
        positions:    Vec<Point>,
        energies:     Vec<f64>,
        base_station: Point,
    ) -> SimResult<Self> {
        let (nodes, rngs) = NodeSetBuilder::new(base_station, config.seed)
            .positions(positions)
            .energies(energies)
            .build()?;
        Ok(Self::new(config, nodes, rngs, EnergyAwareCost, DijkstraRouter))
    }
}

impl<C: CostModel, R: Router> SimBuilder<C, R, ProxyPipeline> {
    /// Create a builder with all required inputs.
    pub fn new(config: SimConfig, nodes: NodeSet, rngs: NodeRngs, cost: C, router: R) -> Self {
        Self {
            config,
            nodes,
            rngs,
            cost,
            router,
            pipeline: ProxyPipeline::default(),
            deadline: None,
        }
    }
}

impl<C: CostModel, R: Router, P: DataPipeline> SimBuilder<C, R, P> {
    /// Replace the link cost model.
    pub fn cost_model<C2: CostModel>(self, cost: C2) -> SimBuilder<C2, R, P> {
        SimBuilder {
            config:   self.config,
            nodes:    self.nodes,
            rngs:     self.rngs,
            cost,
            router:   self.router,
            pipeline: self.pipeline,
            deadline: self.deadline,
        }
    }

    /// Replace the routing algorithm.
    pub fn router<R2: Router>(self, router: R2) -> SimBuilder<C, R2, P> {
        SimBuilder {
            config:   self.config,
            nodes:    self.nodes,
            rngs:     self.rngs,
            cost:     self.cost,
            router,
            pipeline: self.pipeline,
            deadline: self.deadline,
        }
    }

    /// Replace the payload pipeline.
    pub fn pipeline<P2: DataPipeline>(self, pipeline: P2) -> SimBuilder<C, R, P2> {
        SimBuilder {
            config:   self.config,
            nodes:    self.nodes,
            rngs:     self.rngs,
            cost:     self.cost,
            router:   self.router,
            pipeline,
            deadline: self.deadline,
        }
    }

    /// Abort a run that is still going after `deadline` of wall time.
    ///
    /// Checked between rounds only; a round in progress always completes.
    pub fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Validate inputs and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim<C, R, P>> {
        self.config.validate()?;

        let node_count = self.nodes.len();
        if self.rngs.len() != node_count {
            return Err(SimError::NodeCountMismatch {
                expected: node_count,
                got:      self.rngs.len(),
                what:     "node RNGs",
            });
        }

        let sim_rng = SimRng::new(mix_seed(self.config.seed, REPOSITION_STREAM));

        Ok(Sim {
            config:        self.config,
            round:         wsn_core::Round::ZERO,
            nodes:         self.nodes,
            rngs:          self.rngs,
            sim_rng,
            cost:          self.cost,
            router:        self.router,
            pipeline:      self.pipeline,
            deadline:      self.deadline,
            history:       EnergyHistory::new(node_count),
            transmissions: Vec::new(),
            summaries:     Vec::new(),
        })
    }
}
