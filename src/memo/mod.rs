// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! MEMO tier: immutable, precomputed lookup tables.
//!
//! Every table is a `static` whose value is computed at compile time by
//! const evaluation of the closed-form operations in [`crate::geometry`].
//! The fixed 8/6/12 universes make this possible: there is no runtime
//! initialization step, so no first-use ordering and nothing to
//! synchronize.

pub mod tables;

pub use tables::*;
