// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Preprocessor-text emitter over the memo tables.
//!
//! Compilation targets that cannot run the derivation functions themselves
//! (kernel and shader dialects) take the cube topology as `#define`d
//! initializer lists instead. [`write_tables`] emits the full set to any
//! writer; the `cubegen` binary wires it to stdout.
//!
//! The emission order is fixed and the tables are compile-time constants,
//! so two runs produce identical bytes.

use crate::geometry::constants::{NCORNERS, NDIRECTIONS, NEDGES, NFACES};
use crate::geometry::{Corner, Direction, Edge};
use crate::memo::{
    CORNER_ADJACENT_CORNERS, CORNER_EDGES, CORNER_FACES, CORNER_OPPOSITES, CORNER_VECTORS,
    DIRECTION_OPPOSITES, DIRECTION_VECTORS, EDGE_ADJACENT_EDGES, EDGE_CORNERS, EDGE_FACES,
    EDGE_OPPOSITES, FACE_ADJACENT_FACES, FACE_CORNERS, FACE_EDGES,
};
use std::io::{self, Write};

/// Emit every definition to `out`: a banner, the universe sizes and null
/// codes, then one `#define` per table as a brace-nested initializer list
/// of raw codes, rows in dense-index order.
pub fn write_tables<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "/* Generated by cubegen. Do not edit. */")?;
    writeln!(out)?;
    writeln!(out, "#define CUBE_NCORNERS {}", NCORNERS)?;
    writeln!(out, "#define CUBE_NDIRECTIONS {}", NDIRECTIONS)?;
    writeln!(out, "#define CUBE_NFACES {}", NFACES)?;
    writeln!(out, "#define CUBE_NEDGES {}", NEDGES)?;
    writeln!(out, "#define CUBE_CORNER_NULL {}", Corner::NULL.code())?;
    writeln!(out, "#define CUBE_DIRECTION_NULL {}", Direction::NULL.code())?;
    writeln!(out, "#define CUBE_EDGE_NULL {}", Edge::NULL.code())?;
    writeln!(out)?;
    define_nested(out, "CUBE_CORNER_ADJACENT_CORNERS", &nested(&CORNER_ADJACENT_CORNERS))?;
    define_nested(out, "CUBE_CORNER_EDGES", &nested(&CORNER_EDGES))?;
    define_nested(out, "CUBE_CORNER_FACES", &nested(&CORNER_FACES))?;
    define_flat(out, "CUBE_CORNER_OPPOSITES", &flat(&CORNER_OPPOSITES))?;
    define_nested(out, "CUBE_CORNER_VECTORS", &nested(&CORNER_VECTORS))?;
    define_nested(out, "CUBE_EDGE_CORNERS", &nested(&EDGE_CORNERS))?;
    define_nested(out, "CUBE_EDGE_FACES", &nested(&EDGE_FACES))?;
    define_nested(out, "CUBE_EDGE_ADJACENT_EDGES", &nested(&EDGE_ADJACENT_EDGES))?;
    define_flat(out, "CUBE_EDGE_OPPOSITES", &flat(&EDGE_OPPOSITES))?;
    define_nested(out, "CUBE_FACE_CORNERS", &nested(&FACE_CORNERS))?;
    define_nested(out, "CUBE_FACE_EDGES", &nested(&FACE_EDGES))?;
    define_nested(out, "CUBE_FACE_ADJACENT_FACES", &nested(&FACE_ADJACENT_FACES))?;
    define_flat(out, "CUBE_DIRECTION_OPPOSITES", &flat(&DIRECTION_OPPOSITES))?;
    define_nested(out, "CUBE_DIRECTION_VECTORS", &nested(&DIRECTION_VECTORS))
}

/// The raw value an entity contributes to generated output.
trait RawCode {
    fn raw(self) -> i32;
}

impl RawCode for Corner {
    fn raw(self) -> i32 {
        self.code() as i32
    }
}

impl RawCode for Direction {
    fn raw(self) -> i32 {
        self.code() as i32
    }
}

impl RawCode for Edge {
    fn raw(self) -> i32 {
        self.code() as i32
    }
}

impl RawCode for i32 {
    fn raw(self) -> i32 {
        self
    }
}

fn flat<T: RawCode + Copy>(table: &[T]) -> Vec<i32> {
    table.iter().map(|&e| e.raw()).collect()
}

fn nested<T: RawCode + Copy, const N: usize>(table: &[[T; N]]) -> Vec<Vec<i32>> {
    table.iter().map(|row| flat(row)).collect()
}

fn brace_list(codes: &[i32]) -> String {
    let entries: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
    format!("{{{}}}", entries.join(", "))
}

fn define_flat<W: Write>(out: &mut W, name: &str, codes: &[i32]) -> io::Result<()> {
    writeln!(out, "#define {} {}", name, brace_list(codes))
}

fn define_nested<W: Write>(out: &mut W, name: &str, rows: &[Vec<i32>]) -> io::Result<()> {
    let rendered: Vec<String> = rows.iter().map(|row| brace_list(row)).collect();
    writeln!(out, "#define {} {{{}}}", name, rendered.join(", "))
}
