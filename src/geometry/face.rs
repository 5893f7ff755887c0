// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Face-centric derivations.
//!
//! A cube face is identified with the direction pointing out of it, so
//! [`Face`] is [`Direction`] under another name and the reinterpretation
//! between the two is the identity. This module holds the operations that
//! read a direction as a face: its 4 corners, its 4 boundary edges, the 4
//! faces around it, and the walk across a boundary edge to the neighboring
//! face.
//!
//! A face constrains one coordinate (its own axis, to its own sign) and
//! leaves the other two free, which is why every face-centric result has
//! exactly 4 elements: one per sign combination of the free axes.

use crate::geometry::{Corner, CornerSet, Direction, DirectionSet, Edge, EdgeSet};

/// A cube face, named by its outward direction.
pub type Face = Direction;

/// A set of faces, named for the face reading of [`DirectionSet`].
pub type FaceSet = DirectionSet;

impl Direction {
    /// The 4 corners of this face: the face's sign on its own axis, every
    /// sign combination on the other two.
    ///
    /// Ordered by the edge projection-bit layout: entry i has the unit
    /// coordinate i & 1 on `axis().next()` and i >> 1 on `axis().prev()`.
    /// Requires a non-null face.
    pub const fn corners(self) -> [Corner; 4] {
        let axis = self.axis();
        let positive = self.is_positive();
        let mut result = [Corner::NULL; 4];
        let mut i = 0;
        while i < 4 {
            let mut unit = [0i32; 3];
            unit[axis.index()] = positive as i32;
            unit[axis.next().index()] = (i & 1) as i32;
            unit[axis.prev().index()] = (i >> 1) as i32;
            result[i] = Corner::from_vector(unit[0], unit[1], unit[2]);
            i += 1;
        }
        result
    }

    /// The corners of this face as a set.
    pub fn corner_set(self) -> CornerSet {
        CornerSet::from_corners(&self.corners())
    }

    /// The 4 edges bounding this face: for each non-face axis as base, the
    /// two edges whose projection on the face's axis matches the face's
    /// sign. Both positions along `axis().next()` first. Requires a
    /// non-null face.
    pub const fn edges(self) -> [Edge; 4] {
        let axis = self.axis();
        let positive = self.is_positive();
        [
            // Base axis().next(): its tertiary axis is the face's axis.
            Edge::from_axis(axis.next(), false, positive),
            Edge::from_axis(axis.next(), true, positive),
            // Base axis().prev(): its secondary axis is the face's axis.
            Edge::from_axis(axis.prev(), positive, false),
            Edge::from_axis(axis.prev(), positive, true),
        ]
    }

    /// The edges of this face as a set.
    pub fn edge_set(self) -> EdgeSet {
        EdgeSet::from_edges(&self.edges())
    }

    /// The 4 faces sharing an edge with this one: both signs on each of
    /// the two other axes, `axis().next()` first, positive before
    /// negative. Requires a non-null face.
    pub const fn adjacent_faces(self) -> [Face; 4] {
        let axis = self.axis();
        [
            Direction::from_axis_sign(axis.next(), true),
            Direction::from_axis_sign(axis.next(), false),
            Direction::from_axis_sign(axis.prev(), true),
            Direction::from_axis_sign(axis.prev(), false),
        ]
    }

    /// True when the two faces share an edge, i.e. their axes differ.
    ///
    /// On a cube this is the same as sharing exactly 2 corners. A face is
    /// not adjacent to itself or to its opposite. Requires non-null faces.
    #[inline]
    pub const fn is_adjacent(self, other: Face) -> bool {
        debug_assert!(!self.is_null() && !other.is_null());
        self.axis().index() != other.axis().index()
    }

    /// True when the corner lies on this face.
    #[inline]
    pub const fn contains_corner(self, corner: Corner) -> bool {
        corner.is_on_face(self)
    }

    /// True when the edge bounds this face.
    #[inline]
    pub const fn contains_edge(self, edge: Edge) -> bool {
        edge.is_on_face(self)
    }

    /// Walk across a boundary edge of this face to the unique other face
    /// sharing that edge.
    ///
    /// Flipping twice across the same edge returns to this face.
    ///
    /// # Panics
    ///
    /// Panics unless `edge` bounds this face.
    pub fn flip(self, edge: Edge) -> Face {
        assert!(
            edge.is_on_face(self),
            "Face::flip: {} is not an edge of {}",
            edge,
            self
        );
        let [f0, f1] = edge.faces();
        if f0 == self {
            f1
        } else {
            f0
        }
    }
}
