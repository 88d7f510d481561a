//! Closed sampling ranges for harvest, collection and repositioning.

use crate::{NodeRng, SimRng};

/// A closed interval `[lo, hi]` sampled uniformly.
///
/// A degenerate interval (`lo == hi`) always yields `lo`; `[0, 0]` is how
/// harvesting or collection is switched off for deterministic runs.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    pub lo: f64,
    pub hi: f64,
}

impl Interval {
    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// `[0, 0]`: sampling always yields zero.
    pub const ZERO: Interval = Interval::new(0.0, 0.0);

    /// Finite bounds with `lo <= hi`.
    pub fn is_valid(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo <= self.hi
    }

    /// Valid and entirely `>= 0`.
    pub fn is_non_negative(&self) -> bool {
        self.is_valid() && self.lo >= 0.0
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        (self.lo..=self.hi).contains(&v)
    }

    /// Draw a uniform sample with a per-node RNG.
    #[inline]
    pub fn sample(&self, rng: &mut NodeRng) -> f64 {
        if self.is_degenerate() {
            return self.lo;
        }
        rng.gen_range(self.lo..=self.hi)
    }

    /// Draw a uniform sample with the simulation RNG.
    #[inline]
    pub fn sample_sim(&self, rng: &mut SimRng) -> f64 {
        if self.is_degenerate() {
            return self.lo;
        }
        rng.gen_range(self.lo..=self.hi)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}
