//! Simulation time model.
//!
//! Time is a monotonically increasing `Round` counter.  A round is one
//! discrete step in which every live node runs its
//! harvest → collect → route → transmit → death-check sequence.  There is no
//! wall-clock mapping: the model has no notion of round duration.

use std::fmt;

/// A zero-based round index.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round(pub u64);

impl Round {
    pub const ZERO: Round = Round(0);

    /// The round after `self`.
    #[inline]
    pub fn next(self) -> Round {
        Round(self.0 + 1)
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}
