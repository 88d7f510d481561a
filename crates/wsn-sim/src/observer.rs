//! Simulation observer trait for progress reporting and data collection.

use wsn_core::{NodeId, Round};
use wsn_node::NodeSet;

use crate::{RoundSummary, SkipReason, TransmissionRecord};

/// Callbacks invoked by [`Sim::run`][crate::Sim::run] at key points in the
/// round loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: lifetime tracker
///
/// ```rust,ignore
/// struct FirstDeath(Option<Round>);
///
/// impl SimObserver for FirstDeath {
///     fn on_node_death(&mut self, round: Round, _node: NodeId) {
///         self.0.get_or_insert(round);
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each round, before any node is processed.
    fn on_round_start(&mut self, _round: Round) {}

    /// Called after each successful transmission.
    fn on_transmission(&mut self, _record: &TransmissionRecord) {}

    /// Called when a node had data but did not transmit.
    fn on_transmission_skipped(&mut self, _round: Round, _node: NodeId, _reason: SkipReason) {}

    /// Called once per node, in the round it dies.
    fn on_node_death(&mut self, _round: Round, _node: NodeId) {}

    /// Called at the end of each round, after repositioning.
    ///
    /// Provides read-only access to every node so that output writers can
    /// record energies without the sim knowing about any output format.
    fn on_round_end(&mut self, _summary: &RoundSummary, _nodes: &NodeSet) {}

    /// Called once after the final round completes.
    fn on_sim_end(&mut self, _final_round: Round, _nodes: &NodeSet) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
