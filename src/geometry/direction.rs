// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction codec: the 6 axis-aligned unit directions plus a null sentinel.
//!
//! A direction is a 3-bit code. For a positive direction the code has exactly
//! the bit of its axis set (+x=1, +y=2, +z=4); a negative direction is the
//! bitwise complement (mod 8) of its positive counterpart (-x=6, -y=5, -z=3).
//! The complement trick packs the sign without a dedicated sign bit and keeps
//! the null sentinel at code 0; code 7 (the complement of null) is the one
//! unrepresentable hole in the 3-bit space.
//!
//! | code | direction |
//! |------|-----------|
//! | 0    | null      |
//! | 1    | +x        |
//! | 2    | +y        |
//! | 3    | -z        |
//! | 4    | +z        |
//! | 5    | -y        |
//! | 6    | -x        |
//!
//! A direction with exactly one bit set is positive; with two bits set,
//! negative. `opposite` is XOR with 7, which also maps the null code to the
//! hole, so it requires a non-null input.
//!
//! A cube face is identified with the direction pointing out of it; see the
//! `face` module for the face-centric derivations on this same type.

use std::fmt;

use glam::IVec3;

use crate::geometry::constants::NDIRECTIONS;
use crate::geometry::Axis;

/// One of the 6 axis-aligned directions, or the null direction.
///
/// This is a newtype over the 3-bit code described in the module docs. It is
/// `Copy`, totally ordered by code, and usable as a map/set key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Direction(u8);

/// Signed unit vector per code. Row 0 is the null placeholder so the table
/// can be indexed by code directly.
const VECTORS: [[i32; 3]; 7] = [
    [0, 0, 0],
    [1, 0, 0],
    [0, 1, 0],
    [0, 0, -1],
    [0, 0, 1],
    [0, -1, 0],
    [-1, 0, 0],
];

/// Significant axis per code. Row 0 is a placeholder, never read on the
/// non-null paths.
const AXES: [Axis; 7] = [
    Axis::X,
    Axis::X,
    Axis::Y,
    Axis::Z,
    Axis::Z,
    Axis::Y,
    Axis::X,
];

impl Direction {
    /// The null direction (code 0).
    pub const NULL: Direction = Direction(0);

    pub const POS_X: Direction = Direction(1);
    pub const POS_Y: Direction = Direction(2);
    pub const NEG_Z: Direction = Direction(3);
    pub const POS_Z: Direction = Direction(4);
    pub const NEG_Y: Direction = Direction(5);
    pub const NEG_X: Direction = Direction(6);

    /// All 6 non-null directions in code order.
    ///
    /// The order interleaves signs because the encoding packs sign by
    /// complement; it is nevertheless the canonical iteration order, and
    /// `ALL[i].index() == i` for every entry.
    pub const ALL: [Direction; NDIRECTIONS] = [
        Direction::POS_X,
        Direction::POS_Y,
        Direction::NEG_Z,
        Direction::POS_Z,
        Direction::NEG_Y,
        Direction::NEG_X,
    ];

    /// Create a direction from a raw code, panicking on the code 7 hole or
    /// any larger value. `new(0)` is the null direction.
    ///
    /// # Panics
    ///
    /// Panics if `code` is not in `0..=6`.
    pub fn new(code: u8) -> Self {
        assert!(code < 7, "Direction code out of range: {}", code);
        Self(code)
    }

    /// Try to create a direction from a raw code, returning None for the
    /// code 7 hole or any larger value.
    pub fn try_new(code: u8) -> Option<Self> {
        if code < 7 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// The direction along the given vector.
    ///
    /// Exactly one component must be non-zero; its sign gives the direction's
    /// sign and its magnitude is ignored.
    ///
    /// # Panics
    ///
    /// Panics unless exactly one of `x`, `y`, `z` is non-zero.
    pub fn from_vector(x: i32, y: i32, z: i32) -> Self {
        let nonzero = (x != 0) as u8 + (y != 0) as u8 + (z != 0) as u8;
        assert!(
            nonzero == 1,
            "Direction vector must have exactly one non-zero component: ({},{},{})",
            x,
            y,
            z
        );
        let code = (x != 0) as u8 | ((y != 0) as u8) << 1 | ((z != 0) as u8) << 2;
        if x + y + z < 0 {
            // Negative direction: complement packs the sign.
            Self(code ^ 0b111)
        } else {
            Self(code)
        }
    }

    /// Non-panicking form of [`Direction::from_vector`]: None unless exactly
    /// one component is non-zero.
    pub fn try_from_vector(v: IVec3) -> Option<Self> {
        let nonzero = (v.x != 0) as u8 + (v.y != 0) as u8 + (v.z != 0) as u8;
        if nonzero == 1 {
            Some(Self::from_vector(v.x, v.y, v.z))
        } else {
            None
        }
    }

    /// The direction along `axis`, positive or negative.
    #[inline]
    pub const fn from_axis_sign(axis: Axis, positive: bool) -> Self {
        let code = 1u8 << axis.index();
        if positive {
            Self(code)
        } else {
            Self(code ^ 0b111)
        }
    }

    /// The raw 3-bit code.
    #[inline]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// True for the null direction (code 0).
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    /// True when the code is representable: one of the 6 directions or null.
    /// Only the code 7 hole (and out-of-range codes) is invalid.
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 < 7
    }

    /// The x component (-1, 0 or 1). Requires a non-null direction.
    #[inline]
    pub const fn x(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        VECTORS[self.0 as usize][0]
    }

    /// The y component (-1, 0 or 1). Requires a non-null direction.
    #[inline]
    pub const fn y(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        VECTORS[self.0 as usize][1]
    }

    /// The z component (-1, 0 or 1). Requires a non-null direction.
    #[inline]
    pub const fn z(self) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        VECTORS[self.0 as usize][2]
    }

    /// The component on the given axis. Requires a non-null direction.
    #[inline]
    pub const fn component(self, axis: Axis) -> i32 {
        debug_assert!(!self.is_null() && self.is_valid());
        VECTORS[self.0 as usize][axis.index()]
    }

    /// The signed unit vector of this direction. Requires a non-null
    /// direction.
    #[inline]
    pub fn vector(self) -> IVec3 {
        IVec3::new(self.x(), self.y(), self.z())
    }

    /// The axis this direction runs along. Requires a non-null direction.
    #[inline]
    pub const fn axis(self) -> Axis {
        debug_assert!(!self.is_null() && self.is_valid());
        AXES[self.0 as usize]
    }

    /// True for +x, +y and +z.
    ///
    /// Positive codes have exactly one bit set; negative codes, being
    /// complements, have two. The null direction is neither.
    #[inline]
    pub const fn is_positive(self) -> bool {
        self.0.count_ones() == 1
    }

    /// True for -x, -y and -z. The null direction is neither sign.
    #[inline]
    pub const fn is_negative(self) -> bool {
        !self.is_null() && !self.is_positive()
    }

    /// The opposite direction, same axis with the sign flipped.
    /// Requires a non-null direction.
    #[inline]
    pub const fn opposite(self) -> Self {
        debug_assert!(!self.is_null() && self.is_valid());
        Self(self.0 ^ 0b111)
    }

    /// Dense 0-based index of this direction (code - 1). Requires a non-null
    /// direction.
    #[inline]
    pub const fn index(self) -> usize {
        debug_assert!(!self.is_null() && self.is_valid());
        (self.0 - 1) as usize
    }

    /// Inverse of [`Direction::index`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn by_index(index: usize) -> Self {
        assert!(
            index < NDIRECTIONS,
            "Direction index out of range: {}",
            index
        );
        Self(index as u8 + 1)
    }
}

impl fmt::Display for Direction {
    /// Format as a sign-vector tuple, e.g. "(1,0,0)", or "null".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            f.write_str("null")
        } else {
            write!(f, "({},{},{})", self.x(), self.y(), self.z())
        }
    }
}
