// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! EdgeSet type for representing sets of edges as bitsets.
//!
//! Bit i represents the edge with dense index i. Twelve edges need a u16;
//! the top four bits are always clear.

use crate::geometry::{constants::NEDGES, Edge};
use std::fmt;

/// A set of edges represented as a bitset.
///
/// Bit i (counting from LSB) is set if the edge with dense index i is in
/// the set. This provides O(1) insert, remove, and contains operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeSet(u16);

impl EdgeSet {
    /// Create an empty edge set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create an edge set containing all 12 edges.
    pub fn full() -> Self {
        Self((1 << NEDGES) - 1)
    }

    /// Create an edge set from a slice of edges.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut set = Self::empty();
        for &edge in edges {
            set.insert(edge);
        }
        set
    }

    /// Create an edge set from a raw bit value.
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific edge.
    pub fn contains(self, edge: Edge) -> bool {
        (self.0 >> edge.index()) & 1 != 0
    }

    /// Insert an edge into the set.
    pub fn insert(&mut self, edge: Edge) {
        self.0 |= 1 << edge.index();
    }

    /// Remove an edge from the set.
    pub fn remove(&mut self, edge: Edge) {
        self.0 &= !(1 << edge.index());
    }

    /// Get the number of edges in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Compute the union of two edge sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Compute the intersection of two edge sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Compute the difference of two edge sets (self - other).
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over all edges in the set.
    ///
    /// Edges are yielded in ascending dense-index order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        EdgeSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over edges in an EdgeSet.
struct EdgeSetIter {
    bits: u16,
    index: u8,
}

impl Iterator for EdgeSetIter {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NEDGES as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Edge::by_index(idx as usize));
            }
        }
        None
    }
}

impl fmt::Display for EdgeSet {
    /// Format an edge set as "{0, 3, 11}" over dense indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, edge) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", edge.index())?;
        }
        write!(f, "}}")
    }
}

impl From<&[Edge]> for EdgeSet {
    fn from(edges: &[Edge]) -> Self {
        Self::from_edges(edges)
    }
}
