// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for the cube.
//!
//! This module contains type-safe representations of the cube's parts:
//! - Axis: Coordinate axes (x, y, z) with the cyclic next/prev rotation
//! - Corner: The 8 vertices, encoded in 3 sign bits
//! - Direction: The 6 axis-aligned unit directions
//! - Face: The 6 faces, identified with their outward directions
//! - Edge: The 12 edges, encoded as base axis plus 2 projection bits
//! - CornerSet / DirectionSet / EdgeSet: Bitsets over each universe
//!
//! Every type is a small Copy value; every operation is closed-form bit
//! arithmetic. Precomputed cross tables over these operations live in
//! [`crate::memo`].

pub mod axis;
pub mod constants;
pub mod corner;
pub mod corner_set;
pub mod direction;
pub mod direction_set;
pub mod edge;
pub mod edge_set;
pub mod face;

// Re-export for convenience
pub use axis::Axis;
pub use constants::*;
pub use corner::Corner;
pub use corner_set::CornerSet;
pub use direction::Direction;
pub use direction_set::DirectionSet;
pub use edge::Edge;
pub use edge_set::EdgeSet;
pub use face::{Face, FaceSet};
