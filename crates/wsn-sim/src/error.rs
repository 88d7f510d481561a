use thiserror::Error;
use wsn_core::WsnError;
use wsn_routing::RoutingError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid simulation configuration: {0}")]
    Config(String),

    #[error("{what} length {got} does not match node count {expected}")]
    NodeCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("deadline exceeded after {completed_rounds} complete rounds")]
    DeadlineExceeded { completed_rounds: u64 },

    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),
}

impl From<WsnError> for SimError {
    fn from(e: WsnError) -> Self {
        let WsnError::Config(msg) = e;
        SimError::Config(msg)
    }
}

pub type SimResult<T> = Result<T, SimError>;
