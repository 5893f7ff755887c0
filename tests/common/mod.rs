// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use cube_topology::{Corner, Direction, Edge};

/// The corner at the given signed coordinates.
pub fn corner(x: i32, y: i32, z: i32) -> Corner {
    Corner::from_vector(x, y, z)
}

/// The direction with the given (single non-zero) components.
pub fn direction(x: i32, y: i32, z: i32) -> Direction {
    Direction::from_vector(x, y, z)
}

/// The edge between the corners at the given signed coordinates.
pub fn edge(c0: (i32, i32, i32), c1: (i32, i32, i32)) -> Edge {
    Edge::from_corners(corner(c0.0, c0.1, c0.2), corner(c1.0, c1.1, c1.2))
}
