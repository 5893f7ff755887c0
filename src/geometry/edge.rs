// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge codec: the 12 cube edges plus a null sentinel.
//!
//! An edge runs along one axis (its base axis) at one of four positions,
//! fixed by a sign on each of the other two axes. The code packs this as
//!
//! ```text
//! | bits 3:2  | bit 1               | bit 0                |
//! | base axis | tertiary projection | secondary projection |
//! ```
//!
//! giving codes 0..=11 (base axis 0..=2, four positions each) with 12 as the
//! null sentinel. The secondary and tertiary axes are never stored: they are
//! always `base.next()` and `base.prev()` around the x -> y -> z cycle. A
//! projection bit of 0 places the edge on the -1 side of that axis, 1 on the
//! +1 side.
//!
//! The canonical edge of a base axis (both projection bits clear) runs from
//! the all-negative corner; setting a projection bit translates it to the
//! high side of that axis. The two endpoints differ only in the base-axis
//! bit, which is how an edge is recovered from an unordered corner pair.

use std::fmt;

use crate::geometry::constants::NEDGES;
use crate::geometry::{Axis, Corner, CornerSet, Direction, Face};

/// One of the 12 cube edges, or the null edge.
///
/// Newtype over the edge code (0..=11 real, 12 null). `Copy`, totally
/// ordered by code, usable as a map/set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(u8);

impl Edge {
    /// The null edge (code 12).
    pub const NULL: Edge = Edge(12);

    /// All 12 edges in code order: the four x-axis edges, then y, then z.
    pub const ALL: [Edge; NEDGES] = [
        Edge(0),
        Edge(1),
        Edge(2),
        Edge(3),
        Edge(4),
        Edge(5),
        Edge(6),
        Edge(7),
        Edge(8),
        Edge(9),
        Edge(10),
        Edge(11),
    ];

    /// Create an edge from a raw code. `new(12)` is the null edge.
    ///
    /// # Panics
    ///
    /// Panics if `code > 12`.
    pub fn new(code: u8) -> Self {
        assert!(code <= 12, "Edge code out of range: {}", code);
        Self(code)
    }

    /// Try to create an edge from a raw code, returning None above the null
    /// code.
    pub fn try_new(code: u8) -> Option<Self> {
        if code <= 12 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The edge with the given base axis and projection bits.
    ///
    /// `project_secondary` places the edge on the +1 side of `base.next()`;
    /// `project_tertiary` on the +1 side of `base.prev()`. Decoding the
    /// result reproduces exactly these three fields.
    #[inline]
    pub const fn from_axis(base: Axis, project_secondary: bool, project_tertiary: bool) -> Self {
        Self((base.index() as u8) << 2 | project_secondary as u8 | (project_tertiary as u8) << 1)
    }

    /// The edge connecting two adjacent corners.
    ///
    /// Order-independent: the base axis is the one axis on which the two
    /// corners differ, and the projection bits are their shared bits on the
    /// other two axes.
    ///
    /// # Panics
    ///
    /// Panics unless the corners are adjacent.
    pub const fn from_corners(c0: Corner, c1: Corner) -> Self {
        assert!(c0.is_adjacent(c1), "Edge endpoints must be adjacent corners");
        let base = Axis::from_index((c0.code() ^ c1.code()).trailing_zeros() as usize);
        let project_secondary = (c0.code() >> base.next().index()) & 1;
        let project_tertiary = (c0.code() >> base.prev().index()) & 1;
        Self((base.index() as u8) << 2 | project_secondary | project_tertiary << 1)
    }

    /// The raw 4-bit code.
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// True for the null edge.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 12
    }

    /// True when the code is representable: a real edge or null.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 <= 12
    }

    /// The axis this edge runs along. Requires a non-null edge.
    #[inline]
    pub const fn base_axis(self) -> Axis {
        debug_assert!(!self.is_null() && self.is_valid());
        Axis::from_index((self.0 >> 2) as usize)
    }

    /// The first non-base axis, `base_axis().next()`.
    #[inline]
    pub const fn secondary_axis(self) -> Axis {
        self.base_axis().next()
    }

    /// The second non-base axis, `base_axis().prev()`.
    #[inline]
    pub const fn tertiary_axis(self) -> Axis {
        self.base_axis().prev()
    }

    /// True when the edge sits on the +1 side of the secondary axis.
    #[inline]
    pub const fn project_secondary(self) -> bool {
        debug_assert!(!self.is_null() && self.is_valid());
        self.0 & 1 != 0
    }

    /// True when the edge sits on the +1 side of the tertiary axis.
    #[inline]
    pub const fn project_tertiary(self) -> bool {
        debug_assert!(!self.is_null() && self.is_valid());
        self.0 & 2 != 0
    }

    /// The endpoint on the -1 side of the base axis.
    pub const fn corner0(self) -> Corner {
        let mut unit = [0i32; 3];
        unit[self.secondary_axis().index()] = self.project_secondary() as i32;
        unit[self.tertiary_axis().index()] = self.project_tertiary() as i32;
        Corner::from_vector(unit[0], unit[1], unit[2])
    }

    /// The endpoint on the +1 side of the base axis.
    pub const fn corner1(self) -> Corner {
        let mut unit = [0i32; 3];
        unit[self.base_axis().index()] = 1;
        unit[self.secondary_axis().index()] = self.project_secondary() as i32;
        unit[self.tertiary_axis().index()] = self.project_tertiary() as i32;
        Corner::from_vector(unit[0], unit[1], unit[2])
    }

    /// Both endpoints, low side of the base axis first.
    #[inline]
    pub const fn corners(self) -> [Corner; 2] {
        [self.corner0(), self.corner1()]
    }

    /// The endpoints as a set.
    pub fn corner_set(self) -> CornerSet {
        CornerSet::from_corners(&self.corners())
    }

    /// The diagonally opposite edge: same base axis, both projection bits
    /// flipped. Shares no corner with this edge. Requires a non-null edge.
    #[inline]
    pub const fn opposite(self) -> Self {
        debug_assert!(!self.is_null() && self.is_valid());
        Self(self.0 ^ 0b11)
    }

    /// Given one of this edge's two faces, the other edge of that face
    /// sharing no corner with this one.
    ///
    /// Computed set-wise: the face's 4 corners minus this edge's 2
    /// endpoints leave exactly the far pair, which spans the result.
    ///
    /// # Panics
    ///
    /// Panics unless `face` is one of this edge's faces.
    pub fn opposite_on(self, face: Face) -> Self {
        assert!(
            self.is_on_face(face),
            "Edge::opposite_on: {} is not a face of {}",
            face,
            self
        );
        let far = face.corner_set().difference(self.corner_set());
        let mut corners = far.iter();
        match (corners.next(), corners.next()) {
            (Some(a), Some(b)) => Self::from_corners(a, b),
            _ => unreachable!("removing an edge from its face leaves two corners"),
        }
    }

    /// The two faces this edge bounds, secondary axis first: for each
    /// non-base axis, the face whose sign is the projection bit on that
    /// axis.
    #[inline]
    pub const fn faces(self) -> [Face; 2] {
        [
            Direction::from_axis_sign(self.secondary_axis(), self.project_secondary()),
            Direction::from_axis_sign(self.tertiary_axis(), self.project_tertiary()),
        ]
    }

    /// The 4 edges sharing exactly one endpoint with this one, two per
    /// endpoint (one along each non-base axis), corner0's pair first.
    ///
    /// Building per endpoint and per axis yields each neighbor exactly
    /// once, so the result needs no deduplication.
    pub const fn adjacent_edges(self) -> [Edge; 4] {
        let along_secondary = Direction::from_axis_sign(self.secondary_axis(), true);
        let along_tertiary = Direction::from_axis_sign(self.tertiary_axis(), true);
        let c0 = self.corner0();
        let c1 = self.corner1();
        [
            c0.edge(along_secondary),
            c0.edge(along_tertiary),
            c1.edge(along_secondary),
            c1.edge(along_tertiary),
        ]
    }

    /// True when the two edges are distinct and share an endpoint.
    ///
    /// Two distinct edges can never share both endpoints, so sharing at
    /// least one corner means sharing exactly one. An edge is not adjacent
    /// to itself. Requires non-null edges.
    #[inline]
    pub const fn is_adjacent(self, other: Self) -> bool {
        debug_assert!(!self.is_null() && !other.is_null());
        self.0 != other.0
            && (self.has_corner(other.corner0()) || self.has_corner(other.corner1()))
    }

    /// True when this edge lies in the plane of the face (equivalently,
    /// shares exactly 2 corners with it): the base axis differs from the
    /// face's axis and the projection bit on the face's axis matches the
    /// face's sign. Requires non-null inputs.
    pub const fn is_on_face(self, face: Face) -> bool {
        debug_assert!(!self.is_null() && !face.is_null());
        let face_axis = face.axis().index();
        if face_axis == self.base_axis().index() {
            return false;
        }
        let projected = if face_axis == self.secondary_axis().index() {
            self.project_secondary()
        } else {
            self.project_tertiary()
        };
        projected == face.is_positive()
    }

    /// True when the corner is one of this edge's endpoints.
    #[inline]
    pub const fn has_corner(self, corner: Corner) -> bool {
        corner.code() == self.corner0().code() || corner.code() == self.corner1().code()
    }

    /// The endpoints shared with another edge: 2 corners only when the
    /// edges are equal, 1 when adjacent, 0 when parallel or opposite.
    pub fn shared_corners(self, other: Self) -> CornerSet {
        self.corner_set().intersection(other.corner_set())
    }

    /// Dense 0-based index, equal to the code. Requires a non-null edge.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(!self.is_null() && self.is_valid());
        self.0 as usize
    }

    /// Inverse of [`Edge::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 12`.
    pub fn by_index(index: usize) -> Self {
        assert!(index < NEDGES, "Edge index out of range: {}", index);
        Self(index as u8)
    }
}

impl fmt::Display for Edge {
    /// Format as the endpoint pair, e.g. "(-1,-1,-1)-(1,-1,-1)", or "null".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "{}-{}", self.corner0(), self.corner1())
        }
    }
}
