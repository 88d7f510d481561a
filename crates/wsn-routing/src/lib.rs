//! `wsn-routing`: link costs, routing graph, and shortest paths.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`cost`]   | `Endpoint`, `CostModel` trait, `EnergyAwareCost`, `UniformDistanceCost` |
//! | [`graph`]  | `RoutingGraph` (complete graph rebuilt per query), `Edge`    |
//! | [`router`] | `Router` trait, `DijkstraRouter`, `ShortestPaths`, `Route`   |
//! | [`error`]  | `RoutingError`, `RoutingResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                    |
//! |------------|-----------------------------------------------------------|
//! | `parallel` | Builds graph rows on Rayon's thread pool.                 |
//! | `serde`    | Derives `Serialize`/`Deserialize` on public types.        |

pub mod cost;
pub mod error;
pub mod graph;
pub mod router;

#[cfg(test)]
mod tests;

pub use cost::{CostModel, Endpoint, EnergyAwareCost, UniformDistanceCost};
pub use error::{RoutingError, RoutingResult};
pub use graph::{Edge, RoutingGraph};
pub use router::{DijkstraRouter, Route, Router, ShortestPaths};
