//! Routing-subsystem error type.

use thiserror::Error;

use wsn_core::Hop;

/// Errors produced by `wsn-routing`.
///
/// An unreachable base station is not an error: routers report it as
/// `Ok(None)`.
#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("{0} is not a vertex of the routing graph")]
    UnknownVertex(Hop),
}

pub type RoutingResult<T> = Result<T, RoutingError>;
