//! `wsn-core`: foundational types for the sensor network simulator.
//!
//! This crate is a dependency of every other `wsn-*` crate.  It has no
//! `wsn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `NodeId`, `Hop` (sensor node or base station)         |
//! | [`geo`]         | `Point`, Euclidean distance, `Bounds`                 |
//! | [`time`]        | `Round`                                               |
//! | [`interval`]    | `Interval`, closed sampling range                     |
//! | [`rng`]         | `NodeRng` (per-node), `SimRng` (global)               |
//! | [`config`]      | `SimConfig`, `SinkEdges`                              |
//! | [`error`]       | `WsnError`, `WsnResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod interval;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{SimConfig, SinkEdges};
pub use error::{WsnError, WsnResult};
pub use geo::{Bounds, Point};
pub use ids::{Hop, NodeId};
pub use interval::Interval;
pub use rng::{NodeRng, SimRng};
pub use time::Round;
