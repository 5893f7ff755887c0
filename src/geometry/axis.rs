// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Coordinate axes and the cyclic axis permutation.
//!
//! The corner and edge codes assign one bit position per axis, so axes carry
//! a dense index (x=0, y=1, z=2). Every edge/face cross-operation decomposes
//! 3-space into a base axis plus the two remaining axes, obtained by rotating
//! one and two steps around the x -> y -> z -> x cycle. The rotation must be
//! exactly this modulo-3 cycle; an arbitrary permutation of the other two
//! axes silently breaks edge/face adjacency.

use std::fmt;

use strum_macros::EnumCount as EnumCountMacro;

/// One of the three coordinate axes.
///
/// Discriminants are the dense axis indices used as bit positions in the
/// corner code and as the base-axis field of the edge code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumCountMacro)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    /// All three axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Dense index of this axis (x=0, y=1, z=2).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The axis with the given dense index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 3`.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        match index {
            0 => Axis::X,
            1 => Axis::Y,
            2 => Axis::Z,
            _ => panic!("Axis index out of range"),
        }
    }

    /// The next axis around the x -> y -> z -> x cycle.
    ///
    /// For an edge with base axis `b`, `b.next()` is the secondary axis.
    #[inline]
    pub const fn next(self) -> Self {
        Self::from_index((self.index() + 1) % 3)
    }

    /// The axis two steps around the cycle, equal to `next().next()`.
    ///
    /// For an edge with base axis `b`, `b.prev()` is the tertiary axis.
    #[inline]
    pub const fn prev(self) -> Self {
        Self::from_index((self.index() + 2) % 3)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        })
    }
}
