// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! DirectionSet type for representing sets of directions as bitsets.
//!
//! Bit i represents the direction with dense index i (code i + 1), so the
//! null direction has no bit. Read through the [`FaceSet`] alias the same
//! bits represent a set of faces.
//!
//! [`FaceSet`]: crate::geometry::FaceSet

use crate::geometry::{constants::NDIRECTIONS, Direction};
use std::fmt;

/// A set of directions represented as a bitset.
///
/// Bit i (counting from LSB) is set if the direction with dense index i is
/// in the set. This provides O(1) insert, remove, and contains operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// Create an empty direction set.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a direction set containing all 6 directions.
    pub fn full() -> Self {
        Self((1 << NDIRECTIONS) - 1)
    }

    /// Create a direction set from a slice of directions.
    pub fn from_directions(directions: &[Direction]) -> Self {
        let mut set = Self::empty();
        for &direction in directions {
            set.insert(direction);
        }
        set
    }

    /// Create a direction set from a raw bit value.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Check if the set contains a specific direction.
    pub fn contains(self, direction: Direction) -> bool {
        (self.0 >> direction.index()) & 1 != 0
    }

    /// Insert a direction into the set.
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    /// Remove a direction from the set.
    pub fn remove(&mut self, direction: Direction) {
        self.0 &= !(1 << direction.index());
    }

    /// Get the number of directions in the set (population count).
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

    /// Compute the union of two direction sets.
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Compute the intersection of two direction sets.
    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Compute the difference of two direction sets (self - other).
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Iterate over all directions in the set.
    ///
    /// Directions are yielded in ascending dense-index order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        DirectionSetIter {
            bits: self.0,
            index: 0,
        }
    }
}

/// Iterator over directions in a DirectionSet.
struct DirectionSetIter {
    bits: u8,
    index: u8,
}

impl Iterator for DirectionSetIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < NDIRECTIONS as u8 {
            let idx = self.index;
            self.index += 1;

            if (self.bits >> idx) & 1 != 0 {
                return Some(Direction::by_index(idx as usize));
            }
        }
        None
    }
}

impl fmt::Display for DirectionSet {
    /// Format a direction set as "{0, 4}" over dense indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, direction) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", direction.index())?;
        }
        write!(f, "}}")
    }
}

impl From<&[Direction]> for DirectionSet {
    fn from(directions: &[Direction]) -> Self {
        Self::from_directions(directions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_full() {
        assert!(DirectionSet::empty().is_empty());
        assert_eq!(DirectionSet::empty().len(), 0);

        let full = DirectionSet::full();
        assert_eq!(full.len(), NDIRECTIONS);
        for d in Direction::ALL {
            assert!(full.contains(d));
        }
    }

    #[test]
    fn test_insert_remove() {
        let mut set = DirectionSet::empty();
        set.insert(Direction::POS_X);
        set.insert(Direction::NEG_X);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::POS_X));
        assert!(!set.contains(Direction::POS_Y));

        set.remove(Direction::POS_X);
        assert!(!set.contains(Direction::POS_X));
        assert!(set.contains(Direction::NEG_X));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_set_algebra() {
        let a = DirectionSet::from_directions(&[Direction::POS_X, Direction::POS_Y]);
        let b = DirectionSet::from_directions(&[Direction::POS_Y, Direction::NEG_Z]);

        assert_eq!(a.union(b).len(), 3);
        assert_eq!(a.intersection(b).len(), 1);
        assert!(a.intersection(b).contains(Direction::POS_Y));
        assert_eq!(a.difference(b).len(), 1);
        assert!(a.difference(b).contains(Direction::POS_X));
    }

    #[test]
    fn test_iter_ascending() {
        let mut set = DirectionSet::empty();
        set.insert(Direction::NEG_X); // index 5
        set.insert(Direction::POS_X); // index 0
        set.insert(Direction::POS_Z); // index 3

        let directions: Vec<_> = set.iter().collect();
        assert_eq!(
            directions,
            vec![Direction::POS_X, Direction::POS_Z, Direction::NEG_X]
        );
    }

    #[test]
    fn test_display() {
        let mut set = DirectionSet::empty();
        assert_eq!(format!("{}", set), "{}");

        set.insert(Direction::POS_X);
        set.insert(Direction::NEG_X);
        assert_eq!(format!("{}", set), "{0, 5}");
    }

    #[test]
    fn test_from_slice() {
        let directions = [Direction::POS_X, Direction::NEG_X];
        let set: DirectionSet = (&directions[..]).into();

        assert!(set.contains(Direction::POS_X));
        assert!(set.contains(Direction::NEG_X));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_bits_round_trip() {
        let mut set = DirectionSet::empty();
        set.insert(Direction::POS_X); // index 0
        set.insert(Direction::POS_Z); // index 3
        assert_eq!(set.bits(), 0b1001);
        assert_eq!(DirectionSet::from_bits(set.bits()), set);
        assert_eq!(DirectionSet::from_bits(0), DirectionSet::empty());
    }

    #[test]
    fn test_full_covers_opposites() {
        // Removing a direction and its opposite from the full set leaves
        // the four perpendicular directions.
        let mut set = DirectionSet::full();
        set.remove(Direction::POS_Z);
        set.remove(Direction::NEG_Z);
        assert_eq!(set.len(), 4);
        for d in set.iter() {
            assert_ne!(d.axis(), Direction::POS_Z.axis());
        }
    }
}
