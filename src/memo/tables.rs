// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Precomputed cross tables over the cube's parts.
//!
//! Each table is a `static` built at compile time by a `const fn` loop over
//! the closed-form operations in [`crate::geometry`]. A table row is exactly
//! what the corresponding operation returns for that dense index; the tables
//! are a cache, never an independent source of truth. Equivalence with the
//! live operations is checked in the test suite.
//!
//! Rows are indexed by dense index: corner code 0..8, edge code 0..12,
//! direction/face code minus one for 0..6.

use crate::geometry::constants::{NCORNERS, NDIRECTIONS, NEDGES, NFACES};
use crate::geometry::{Corner, Direction, Edge, Face};

/// For each corner, its 3 adjacent corners in axis order.
pub static CORNER_ADJACENT_CORNERS: [[Corner; 3]; NCORNERS] = compute_corner_adjacent_corners();

/// For each corner, its 3 incident edges in axis order.
pub static CORNER_EDGES: [[Edge; 3]; NCORNERS] = compute_corner_edges();

/// For each corner, its 3 incident faces in axis order.
pub static CORNER_FACES: [[Face; 3]; NCORNERS] = compute_corner_faces();

/// For each corner, the diagonally opposite corner.
pub static CORNER_OPPOSITES: [Corner; NCORNERS] = compute_corner_opposites();

/// For each corner, its signed coordinates.
pub static CORNER_VECTORS: [[i32; 3]; NCORNERS] = compute_corner_vectors();

/// For each edge, its 2 endpoint corners, base-axis bit 0 first.
pub static EDGE_CORNERS: [[Corner; 2]; NEDGES] = compute_edge_corners();

/// For each edge, its 2 incident faces, secondary axis first.
pub static EDGE_FACES: [[Face; 2]; NEDGES] = compute_edge_faces();

/// For each edge, the 4 edges sharing exactly one endpoint with it.
pub static EDGE_ADJACENT_EDGES: [[Edge; 4]; NEDGES] = compute_edge_adjacent_edges();

/// For each edge, the diagonally opposite edge.
pub static EDGE_OPPOSITES: [Edge; NEDGES] = compute_edge_opposites();

/// For each face, its 4 corners in projection-bit order.
pub static FACE_CORNERS: [[Corner; 4]; NFACES] = compute_face_corners();

/// For each face, its 4 boundary edges.
pub static FACE_EDGES: [[Edge; 4]; NFACES] = compute_face_edges();

/// For each face, the 4 faces sharing an edge with it.
pub static FACE_ADJACENT_FACES: [[Face; 4]; NFACES] = compute_face_adjacent_faces();

/// For each direction, the opposite direction.
pub static DIRECTION_OPPOSITES: [Direction; NDIRECTIONS] = compute_direction_opposites();

/// For each direction, its unit vector components.
pub static DIRECTION_VECTORS: [[i32; 3]; NDIRECTIONS] = compute_direction_vectors();

const fn compute_corner_adjacent_corners() -> [[Corner; 3]; NCORNERS] {
    let mut table = [[Corner::NULL; 3]; NCORNERS];
    let mut i = 0;
    while i < NCORNERS {
        table[i] = Corner::ALL[i].adjacents();
        i += 1;
    }
    table
}

const fn compute_corner_edges() -> [[Edge; 3]; NCORNERS] {
    let mut table = [[Edge::NULL; 3]; NCORNERS];
    let mut i = 0;
    while i < NCORNERS {
        table[i] = Corner::ALL[i].edges();
        i += 1;
    }
    table
}

const fn compute_corner_faces() -> [[Face; 3]; NCORNERS] {
    let mut table = [[Direction::NULL; 3]; NCORNERS];
    let mut i = 0;
    while i < NCORNERS {
        table[i] = Corner::ALL[i].faces();
        i += 1;
    }
    table
}

const fn compute_corner_opposites() -> [Corner; NCORNERS] {
    let mut table = [Corner::NULL; NCORNERS];
    let mut i = 0;
    while i < NCORNERS {
        table[i] = Corner::ALL[i].opposite();
        i += 1;
    }
    table
}

const fn compute_corner_vectors() -> [[i32; 3]; NCORNERS] {
    let mut table = [[0; 3]; NCORNERS];
    let mut i = 0;
    while i < NCORNERS {
        let c = Corner::ALL[i];
        table[i] = [c.x(), c.y(), c.z()];
        i += 1;
    }
    table
}

const fn compute_edge_corners() -> [[Corner; 2]; NEDGES] {
    let mut table = [[Corner::NULL; 2]; NEDGES];
    let mut i = 0;
    while i < NEDGES {
        table[i] = Edge::ALL[i].corners();
        i += 1;
    }
    table
}

const fn compute_edge_faces() -> [[Face; 2]; NEDGES] {
    let mut table = [[Direction::NULL; 2]; NEDGES];
    let mut i = 0;
    while i < NEDGES {
        table[i] = Edge::ALL[i].faces();
        i += 1;
    }
    table
}

const fn compute_edge_adjacent_edges() -> [[Edge; 4]; NEDGES] {
    let mut table = [[Edge::NULL; 4]; NEDGES];
    let mut i = 0;
    while i < NEDGES {
        table[i] = Edge::ALL[i].adjacent_edges();
        i += 1;
    }
    table
}

const fn compute_edge_opposites() -> [Edge; NEDGES] {
    let mut table = [Edge::NULL; NEDGES];
    let mut i = 0;
    while i < NEDGES {
        table[i] = Edge::ALL[i].opposite();
        i += 1;
    }
    table
}

const fn compute_face_corners() -> [[Corner; 4]; NFACES] {
    let mut table = [[Corner::NULL; 4]; NFACES];
    let mut i = 0;
    while i < NFACES {
        table[i] = Face::ALL[i].corners();
        i += 1;
    }
    table
}

const fn compute_face_edges() -> [[Edge; 4]; NFACES] {
    let mut table = [[Edge::NULL; 4]; NFACES];
    let mut i = 0;
    while i < NFACES {
        table[i] = Face::ALL[i].edges();
        i += 1;
    }
    table
}

const fn compute_face_adjacent_faces() -> [[Face; 4]; NFACES] {
    let mut table = [[Direction::NULL; 4]; NFACES];
    let mut i = 0;
    while i < NFACES {
        table[i] = Face::ALL[i].adjacent_faces();
        i += 1;
    }
    table
}

const fn compute_direction_opposites() -> [Direction; NDIRECTIONS] {
    let mut table = [Direction::NULL; NDIRECTIONS];
    let mut i = 0;
    while i < NDIRECTIONS {
        table[i] = Direction::ALL[i].opposite();
        i += 1;
    }
    table
}

const fn compute_direction_vectors() -> [[i32; 3]; NDIRECTIONS] {
    let mut table = [[0; 3]; NDIRECTIONS];
    let mut i = 0;
    while i < NDIRECTIONS {
        let d = Direction::ALL[i];
        table[i] = [d.x(), d.y(), d.z()];
        i += 1;
    }
    table
}
