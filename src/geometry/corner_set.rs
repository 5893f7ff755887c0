// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! CornerSet type for representing sets of corners as bitsets.
//!
//! A CornerSet is a compact representation of a set of corners using a bitset,
//! where bit i represents the presence of the corner with dense index i.
//!
//! # Examples
//!
//! ```
//! use cube_topology::geometry::{Corner, CornerSet};
//!
//! // Create a corner set
//! let mut set = CornerSet::empty();
//! set.insert(Corner::from_vector(-1, -1, -1));
//! set.insert(Corner::from_vector(1, -1, -1));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(format!("{}", set), "{0, 1}");
//!
//! // Iterate over corners in the set
//! let xs: Vec<i32> = set.iter().map(|c| c.x()).collect();
//! assert_eq!(xs, vec![-1, 1]);
//! ```

use crate::geometry::{constants::NCORNERS, Corner};
use std::fmt;

/// A set of corners represented as a bitset.
///
/// Bit i (counting from LSB) is set if the corner with dense index i is in
/// the set. This provides O(1) insert, remove, and contains operations.
///
/// The 8 corners fill a u8 exactly. The null corner has no bit and must not
/// be inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CornerSet(u8);

impl CornerSet {
    /// Create an empty corner set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a corner set containing all 8 corners.
    pub fn full() -> Self {
        // NCORNERS is exactly the width of u8.
        Self(u8::MAX)
    }

    /// Create a corner set from a slice of corners.
    pub fn from_corners(corners: &[Corner]) -> Self {
        let mut set = Self::empty();
        for &corner in corners {
            set.insert(corner);
        }
        set
    }

    /// Create a corner set from a raw bit value.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific corner.
    pub fn contains(self, corner: Corner) -> bool {
        (self.0 >> corner.index()) & 1 != 0
    }

    /// Insert a corner into the set.
    pub fn insert(&mut self, corner: Corner) {
        self.0 |= 1 << corner.index();
    }

    /// Remove a corner from the set.
    pub fn remove(&mut self, corner: Corner) {
        self.0 &= !(1 << corner.index());
    }

    /// Get the number of corners in the set (population count).
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Get the underlying bitset value.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Compute the union of two corner sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Compute the intersection of two corner sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Compute the difference of two corner sets (self - other).
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over all corners in the set.
    ///
    /// Corners are yielded in ascending dense-index order.
    pub fn iter(self) -> impl Iterator<Item = Corner> {
        CornerSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over corners in a CornerSet.
struct CornerSetIter {
    bits: u8,
    index: u8,
}

impl Iterator for CornerSetIter {
    type Item = Corner;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NCORNERS as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Corner::by_index(idx as usize));
            }
        }
        None
    }
}

impl fmt::Display for CornerSet {
    /// Format a corner set as "{0, 3, 5}" over dense indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, corner) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", corner.index())?;
        }
        write!(f, "}}")
    }
}

impl From<&[Corner]> for CornerSet {
    fn from(corners: &[Corner]) -> Self {
        Self::from_corners(corners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(x: i32, y: i32, z: i32) -> Corner {
        Corner::from_vector(x, y, z)
    }

    #[test]
    fn test_empty() {
        let set = CornerSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.bits(), 0);
    }

    #[test]
    fn test_full() {
        let set = CornerSet::full();
        assert!(!set.is_empty());
        assert_eq!(set.len(), NCORNERS);

        for c in Corner::ALL {
            assert!(set.contains(c));
        }
    }

    #[test]
    fn test_insert_contains() {
        let mut set = CornerSet::empty();
        assert!(!set.contains(corner(-1, -1, -1)));

        set.insert(corner(-1, -1, -1));
        assert!(set.contains(corner(-1, -1, -1)));
        assert_eq!(set.len(), 1);

        set.insert(corner(1, 1, 1));
        assert!(set.contains(corner(-1, -1, -1)));
        assert!(set.contains(corner(1, 1, 1)));
        assert!(!set.contains(corner(1, -1, -1)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut set = CornerSet::full();
        assert_eq!(set.len(), NCORNERS);

        set.remove(corner(-1, -1, -1));
        assert!(!set.contains(corner(-1, -1, -1)));
        assert_eq!(set.len(), NCORNERS - 1);

        set.remove(corner(-1, -1, -1)); // Remove again - should be idempotent
        assert_eq!(set.len(), NCORNERS - 1);
    }

    #[test]
    fn test_from_corners() {
        let corners = vec![corner(-1, -1, -1), corner(1, -1, -1), corner(1, 1, 1)];
        let set = CornerSet::from_corners(&corners);

        assert!(set.contains(corner(-1, -1, -1)));
        assert!(set.contains(corner(1, -1, -1)));
        assert!(set.contains(corner(1, 1, 1)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_union_intersection_difference() {
        let a = CornerSet::from_corners(&[corner(-1, -1, -1), corner(1, -1, -1)]);
        let b = CornerSet::from_corners(&[corner(1, -1, -1), corner(1, 1, 1)]);

        let union = a.union(b);
        assert_eq!(union.len(), 3);
        assert!(union.contains(corner(-1, -1, -1)));
        assert!(union.contains(corner(1, 1, 1)));

        let intersection = a.intersection(b);
        assert_eq!(intersection.len(), 1);
        assert!(intersection.contains(corner(1, -1, -1)));

        let diff = a.difference(b);
        assert_eq!(diff.len(), 1);
        assert!(diff.contains(corner(-1, -1, -1)));
        assert!(!diff.contains(corner(1, -1, -1)));
    }

    #[test]
    fn test_iter() {
        let mut set = CornerSet::empty();
        set.insert(corner(1, 1, 1));
        set.insert(corner(-1, -1, -1));
        set.insert(corner(1, -1, -1));

        // Ascending dense-index order regardless of insertion order.
        let corners: Vec<_> = set.iter().collect();
        assert_eq!(corners.len(), 3);
        assert_eq!(corners[0], corner(-1, -1, -1));
        assert_eq!(corners[1], corner(1, -1, -1));
        assert_eq!(corners[2], corner(1, 1, 1));
    }

    #[test]
    fn test_display() {
        let mut set = CornerSet::empty();
        assert_eq!(format!("{}", set), "{}");

        set.insert(corner(-1, -1, -1));
        set.insert(corner(1, -1, -1));
        set.insert(corner(1, 1, 1));
        assert_eq!(format!("{}", set), "{0, 1, 7}");
    }

    #[test]
    fn test_equality() {
        let set1 = CornerSet::from_corners(&[corner(-1, -1, -1), corner(1, 1, 1)]);
        let set2 = CornerSet::from_corners(&[corner(1, 1, 1), corner(-1, -1, -1)]);
        assert_eq!(set1, set2);

        let set3 = CornerSet::from_corners(&[corner(-1, -1, -1), corner(1, -1, -1)]);
        assert_ne!(set1, set3);
    }

    #[test]
    fn test_from_slice() {
        let corners = [corner(-1, -1, -1), corner(1, 1, 1)];
        let set: CornerSet = (&corners[..]).into();

        assert!(set.contains(corner(-1, -1, -1)));
        assert!(set.contains(corner(1, 1, 1)));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_bits_round_trip() {
        // Corners 0 and 1 occupy the two low bits.
        let set = CornerSet::from_corners(&[corner(-1, -1, -1), corner(1, -1, -1)]);
        assert_eq!(set.bits(), 0b11);
        assert_eq!(CornerSet::from_bits(set.bits()), set);
        assert_eq!(CornerSet::from_bits(0), CornerSet::empty());
        assert_eq!(CornerSet::from_bits(u8::MAX), CornerSet::full());
    }
}
