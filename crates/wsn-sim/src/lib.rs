//! `wsn-sim`: round loop orchestrator for the sensor network simulator.
//!
//! # Round loop
//!
//! ```text
//! for round in 0..config.rounds:
//!   for node in ascending NodeId order:
//!     dead?      → record 0 in history, next node
//!     ① Harvest : add a sample from config.harvest
//!     ② Collect : draw data from config.collect
//!     ③ Deliver : if data > 0:
//!                    payload = pipeline.encrypt(pipeline.process(data))
//!                    build routing graph from current node states
//!                    route to base station (none → skip)
//!                    transmit (insufficient energy → skip)
//!     ④ Death   : force energy below config.death_threshold to 0
//!     ⑤ Record  : append energy to history
//!   ⑥ Move      : reposition live nodes (config.reposition)
//! ```
//!
//! Skips are outcomes, not errors.  The only failures are configuration
//! errors raised by [`SimBuilder::build`] and an optional deadline.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Builds routing-graph rows on Rayon's thread pool.      |
//! | `serde`    | Serialisable records and reports.                      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wsn_core::{Point, SimConfig};
//! use wsn_sim::{NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::from_inputs(config, positions, energies, Point::new(5.0, 5.0))?
//!     .build()?;
//! sim.run(&mut NoopObserver)?;
//! let report = sim.report();
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod pipeline;
pub mod record;
pub mod sim;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use pipeline::{DataPipeline, PassthroughPipeline, ProxyPipeline};
pub use record::{EnergyHistory, NodeStatus, RoundSummary, SimReport, SkipReason, TransmissionRecord};
pub use sim::Sim;
