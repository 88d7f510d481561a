//! `wsn-node`: sensor node energy lifecycle and node-set storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`node`]    | `SensorNode` (harvest/collect/transmit/death), `BaseStation` |
//! | [`store`]   | `NodeSet` (nodes + base station), `NodeRngs` (per-node RNG) |
//! | [`builder`] | `NodeSetBuilder` (validated construction)                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on all public types.       |

pub mod builder;
pub mod node;
pub mod store;

#[cfg(test)]
mod tests;

pub use builder::NodeSetBuilder;
pub use node::{BaseStation, SensorNode, hop_count, transmission_cost};
pub use store::{NodeRngs, NodeSet};
