// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Corner codec: the 8 cube corners plus a null sentinel.
//!
//! A corner is encoded in 3 payload bits, one per axis: bit i is set when
//! the corner is on the positive side of axis i. Code 8 (a fourth bit) is
//! the null sentinel. The same code serves two coordinate views: signed
//! coordinates in {-1,+1} and unit-cube coordinates in {0,1}; only the sign
//! of an input component matters, so construction accepts either view.
//!
//! ```text
//!           6--------7         bit 0: x  (+1 right)
//!          /|       /|         bit 1: y  (+1 up)
//!         2--------3 |         bit 2: z  (+1 back)
//!         | |      | |
//!         | 4------|-5
//!         |/       |/
//!         0--------1
//! ```
//!
//! Two corners are adjacent exactly when their codes differ in one bit, so
//! all three neighbor operations reduce to bit arithmetic on the payload.
//! The three operations differ only in their boundary policy: `adjacent`
//! wraps to the opposite side, `push` saturates, `moved` returns null.

use std::fmt;

use glam::IVec3;

use crate::geometry::constants::NCORNERS;
use crate::geometry::{Axis, Direction, Edge, Face};

/// One of the 8 cube corners, or the null corner.
///
/// Newtype over the corner code (0..=7 real, 8 null). `Copy`, totally
/// ordered by code, usable as a map/set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Corner(u8);

impl Corner {
    /// The null corner (code 8), returned by [`Corner::moved`] at a
    /// boundary.
    pub const NULL: Corner = Corner(8);

    /// All 8 corners in code order, starting at (-1,-1,-1).
    pub const ALL: [Corner; NCORNERS] = [
        Corner(0),
        Corner(1),
        Corner(2),
        Corner(3),
        Corner(4),
        Corner(5),
        Corner(6),
        Corner(7),
    ];

    /// Create a corner from a raw code. `new(8)` is the null corner.
    ///
    /// # Panics
    ///
    /// Panics if `code > 8`.
    pub fn new(code: u8) -> Self {
        assert!(code <= 8, "Corner code out of range: {}", code);
        Self(code)
    }

    /// Try to create a corner from a raw code, returning None above the
    /// null code.
    pub fn try_new(code: u8) -> Option<Self> {
        if code <= 8 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The corner whose sign on each axis matches the sign of the given
    /// component. Zero counts as negative, so both the signed (-1/+1) and
    /// the unit-cube (0/1) coordinate views construct the same corner.
    #[inline]
    pub const fn from_vector(x: i32, y: i32, z: i32) -> Self {
        Self((x > 0) as u8 | ((y > 0) as u8) << 1 | ((z > 0) as u8) << 2)
    }

    /// The raw code (0..=7 real, 8 null).
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// True for the null corner.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 8
    }

    /// True when the code is representable: a real corner or null.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= 8
    }

    /// The signed x coordinate (-1 or +1). Requires a non-null corner.
    #[inline]
    pub const fn x(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        if self.0 & 1 != 0 {
            1
        } else {
            -1
        }
    }

    /// The signed y coordinate (-1 or +1). Requires a non-null corner.
    #[inline]
    pub const fn y(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        if self.0 & 2 != 0 {
            1
        } else {
            -1
        }
    }

    /// The signed z coordinate (-1 or +1). Requires a non-null corner.
    #[inline]
    pub const fn z(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        if self.0 & 4 != 0 {
            1
        } else {
            -1
        }
    }

    /// The signed coordinate on the given axis (-1 or +1).
    #[inline]
    pub const fn component(self, axis: Axis) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        if (self.0 >> axis.index()) & 1 != 0 {
            1
        } else {
            -1
        }
    }

    /// The unit-cube x coordinate (0 or 1). Requires a non-null corner.
    #[inline]
    pub const fn ux(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        (self.0 & 1) as i32
    }

    /// The unit-cube y coordinate (0 or 1). Requires a non-null corner.
    #[inline]
    pub const fn uy(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        ((self.0 >> 1) & 1) as i32
    }

    /// The unit-cube z coordinate (0 or 1). Requires a non-null corner.
    #[inline]
    pub const fn uz(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        ((self.0 >> 2) & 1) as i32
    }

    /// The unit-cube coordinate on the given axis (0 or 1).
    #[inline]
    pub const fn unit_component(self, axis: Axis) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        ((self.0 >> axis.index()) & 1) as i32
    }

    /// The signed coordinate triple.
    #[inline]
    pub fn vector(self) -> IVec3 {
        IVec3::new(self.x(), self.y(), self.z())
    }

    /// The unit-cube coordinate triple.
    #[inline]
    pub fn unit_vector(self) -> IVec3 {
        IVec3::new(self.ux(), self.uy(), self.uz())
    }

    /// The diagonally opposite corner: all three signs flipped.
    /// Requires a non-null corner.
    #[inline]
    pub const fn opposite(self) -> Self {
        debug_assert!(!self.is_null() && self.is_valid());
        Self(self.0 ^ 0b111)
    }

    /// True when the two corners share an edge, i.e. their codes differ in
    /// exactly one bit. Irreflexive and symmetric. Requires non-null
    /// corners.
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        debug_assert!(!self.is_null() && !other.is_null());
        (self.0 ^ other.0).count_ones() == 1
    }

    /// Wrap neighbor: the corner reached by moving along `direction`,
    /// wrapping to the opposite boundary when the move leaves the cube.
    ///
    /// On the direction's axis the coordinate always flips, which is both
    /// the mod-2 wrap of the unit view and the sign flip of the signed
    /// view, so the result is never null. Requires non-null inputs.
    #[inline]
    pub const fn adjacent(self, direction: Direction) -> Self {
        debug_assert!(!self.is_null() && !direction.is_null());
        Self(self.0 ^ (1 << direction.axis().index()))
    }

    /// Clamp neighbor: like [`Corner::adjacent`], but saturates at the
    /// boundary. Pushing a corner that is already on the direction's side
    /// returns it unchanged. Requires non-null inputs.
    #[inline]
    pub const fn push(self, direction: Direction) -> Self {
        debug_assert!(!self.is_null() && !direction.is_null());
        let bit = 1 << direction.axis().index();
        if direction.is_positive() {
            Self(self.0 | bit)
        } else {
            Self(self.0 & !bit)
        }
    }

    /// Bounded neighbor: like [`Corner::push`], but moving off the cube
    /// returns [`Corner::NULL`] instead of saturating. The caller checks
    /// with [`Corner::is_null`]. Requires non-null inputs.
    #[inline]
    pub const fn moved(self, direction: Direction) -> Self {
        debug_assert!(!self.is_null() && !direction.is_null());
        let axis = direction.axis().index();
        if ((self.0 >> axis) & 1) == (direction.is_positive() as u8) {
            // Already on the target side of this axis.
            Self::NULL
        } else {
            Self(self.0 ^ (1 << axis))
        }
    }

    /// The 3 corners sharing an edge with this one, in axis order.
    #[inline]
    pub const fn adjacents(self) -> [Corner; 3] {
        debug_assert!(!self.is_null() && self.is_valid());
        [Self(self.0 ^ 1), Self(self.0 ^ 2), Self(self.0 ^ 4)]
    }

    /// The 3 faces this corner lies on, in axis order: per axis, the face
    /// whose sign matches this corner's sign.
    #[inline]
    pub const fn faces(self) -> [Face; 3] {
        debug_assert!(!self.is_null() && self.is_valid());
        [
            Direction::from_axis_sign(Axis::X, self.0 & 1 != 0),
            Direction::from_axis_sign(Axis::Y, self.0 & 2 != 0),
            Direction::from_axis_sign(Axis::Z, self.0 & 4 != 0),
        ]
    }

    /// The 3 edges incident to this corner, in axis order: per axis, the
    /// edge to the axis-flipped neighbor.
    #[inline]
    pub const fn edges(self) -> [Edge; 3] {
        debug_assert!(!self.is_null() && self.is_valid());
        [
            Edge::from_corners(self, Self(self.0 ^ 1)),
            Edge::from_corners(self, Self(self.0 ^ 2)),
            Edge::from_corners(self, Self(self.0 ^ 4)),
        ]
    }

    /// The incident edge along the axis of `direction`.
    ///
    /// Both signs of a direction name the same edge: the edge to the wrap
    /// neighbor is the edge to the clamp neighbor's far end.
    #[inline]
    pub const fn edge(self, direction: Direction) -> Edge {
        Edge::from_corners(self, self.adjacent(direction))
    }

    /// The edge connecting this corner to an adjacent one.
    ///
    /// # Panics
    ///
    /// Panics unless the corners are adjacent.
    #[inline]
    pub const fn edge_to(self, other: Self) -> Edge {
        Edge::from_corners(self, other)
    }

    /// The direction from this corner to an adjacent one, the inverse of
    /// [`Corner::adjacent`] and [`Corner::moved`].
    ///
    /// # Panics
    ///
    /// Panics unless the corners are adjacent.
    pub const fn direction_to(self, other: Self) -> Direction {
        assert!(
            self.is_adjacent(other),
            "Corner::direction_to requires adjacent corners"
        );
        let axis = (self.0 ^ other.0).trailing_zeros() as usize;
        Direction::from_axis_sign(Axis::from_index(axis), (other.0 >> axis) & 1 != 0)
    }

    /// True when this corner is one of the edge's two endpoints.
    #[inline]
    pub const fn is_on_edge(self, edge: Edge) -> bool {
        edge.has_corner(self)
    }

    /// True when this corner lies on the face: its sign on the face's axis
    /// matches the face's sign. Requires non-null inputs.
    #[inline]
    pub const fn is_on_face(self, face: Face) -> bool {
        debug_assert!(!self.is_null() && !face.is_null());
        ((self.0 >> face.axis().index()) & 1 != 0) == face.is_positive()
    }

    /// Dense 0-based index, equal to the code. Requires a non-null corner.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(!self.is_null() && self.is_valid());
        self.0 as usize
    }

    /// Inverse of [`Corner::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 8`.
    pub fn by_index(index: usize) -> Self {
        assert!(index < NCORNERS, "Corner index out of range: {}", index);
        Self(index as u8)
    }
}

impl From<IVec3> for Corner {
    /// Classify an arbitrary point by the signs of its components; zero
    /// counts as negative.
    fn from(v: IVec3) -> Self {
        Self::from_vector(v.x, v.y, v.z)
    }
}

impl fmt::Display for Corner {
    /// Format as a signed coordinate tuple, e.g. "(-1,-1,1)", or "null".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "({},{},{})", self.x(), self.y(), self.z())
        }
    }
}
