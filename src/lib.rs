// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Codecs and lookup tables for the topology of the axis-aligned cube.
//!
//! The cube's 8 corners, 6 faces, and 12 edges are each packed into a few
//! bits of a `u8` so that every relationship between them (adjacency,
//! incidence, opposition, crossing from one part to a neighboring part)
//! is a handful of bit operations. Each kind reserves one extra code as a
//! null sentinel for "no such part" results.
//!
//! # Architecture
//!
//! Two tiers:
//!
//! ## Tier 1: Codecs (closed-form)
//!
//! [`geometry`] defines the value types and their operations:
//! - [`geometry::Corner`] - 3 sign bits, one per axis
//! - [`geometry::Direction`] / [`geometry::Face`] - one significant axis
//!   plus sign, faces being directions read as the face they point out of
//! - [`geometry::Edge`] - base axis plus the 2 fixed coordinates
//! - Bitsets over each universe for set-wise queries
//!
//! ## Tier 2: MEMO Data (precomputed)
//!
//! [`memo`] re-derives the cross tables (corner-to-edges, face-to-corners,
//! and so on) from the codecs by const evaluation, trading the bit
//! arithmetic for a single indexed load.
//!
//! # Encoding
//!
//! A corner's code sets bit i when the corner is on the positive side of
//! axis i. A direction's code sets the bit of its axis, complemented mod 8
//! when the direction is negative; this keeps opposition a XOR with 7 and
//! makes 0 the natural null. An edge's code is its base axis times 4 plus
//! the two projection bits giving its fixed coordinates on the other axes.
//!
//! The `cubegen` binary re-emits the memo tables as preprocessor text for
//! compilation targets that cannot evaluate the codecs themselves.

pub mod codegen;
pub mod geometry;
pub mod memo;

// Re-export commonly used types
pub use geometry::{Axis, Corner, CornerSet, Direction, DirectionSet, Edge, EdgeSet, Face, FaceSet};
