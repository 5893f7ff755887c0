// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for cube topology.
//!
//! Every universe size is derived from the axis count rather than written as
//! a bare literal, and the relationships between the sizes are checked at
//! compile time. Nothing here is configurable: a cube has exactly 8 corners,
//! 6 directions/faces and 12 edges.

use crate::geometry::Axis;
use strum::EnumCount;

/// Number of coordinate axes.
pub const NAXES: usize = Axis::COUNT;

/// Number of cube corners (2^NAXES = 8).
///
/// A corner picks one sign per axis, so corners are exactly the 3-bit codes.
pub const NCORNERS: usize = 1 << NAXES;

/// Number of axis-aligned directions (2 * NAXES = 6).
pub const NDIRECTIONS: usize = 2 * NAXES;

/// Number of cube faces.
///
/// A face is identified with the direction pointing out of it, so the two
/// universes are the same size by construction.
pub const NFACES: usize = NDIRECTIONS;

/// Number of cube edges (NAXES * 2^(NAXES-1) = 12).
///
/// An edge picks the axis it runs along plus one sign for each of the other
/// two axes: 3 choices of base axis, 4 positions each.
pub const NEDGES: usize = NAXES * (1 << (NAXES - 1));

/// Compile-time check of the Euler characteristic of the cube surface:
/// V - E + F = 2.
const _: () = assert!(NCORNERS + NFACES - NEDGES == 2, "Euler characteristic");

/// The corner code is also used as a dense bit position, so the corner
/// universe must exactly fill the 3 payload bits.
const _: () = assert!(NCORNERS == 8, "corner codes must fill 3 bits");

/// Direction codes 1..=6 plus the null code 0 must leave exactly one unused
/// code (7, the complement of null) below the 3-bit ceiling.
const _: () = assert!(NDIRECTIONS + 2 == 8, "direction codes must fit 3 bits");
