//! Strongly typed identifiers.
//!
//! `NodeId` is `Copy + Ord + Hash` so it can be used as a map key and sorted
//! without ceremony.  The inner integer is `pub` to allow direct indexing into
//! `Vec`s via `id.0 as usize`, but callers should prefer `.index()`.
//!
//! The base station is not a `NodeId`: every path ends at it, so it gets its
//! own variant in [`Hop`] instead of a reserved integer.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a sensor node in the node set.  Stable for the whole run.
    pub struct NodeId(u32);
}

// ── Hop ───────────────────────────────────────────────────────────────────────

/// One element of a routing path: either a sensor node or the base station.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Hop {
    Node(NodeId),
    BaseStation,
}

impl Hop {
    /// The sensor node behind this hop, if any.
    #[inline]
    pub fn node(self) -> Option<NodeId> {
        match self {
            Hop::Node(id)    => Some(id),
            Hop::BaseStation => None,
        }
    }

    #[inline]
    pub fn is_base_station(self) -> bool {
        matches!(self, Hop::BaseStation)
    }
}

impl From<NodeId> for Hop {
    #[inline]
    fn from(id: NodeId) -> Hop {
        Hop::Node(id)
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hop::Node(id)    => write!(f, "node {}", id.0),
            Hop::BaseStation => f.write_str("base station"),
        }
    }
}
