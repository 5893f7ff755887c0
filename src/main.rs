// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! cubegen: emit the cube topology tables as preprocessor text.
//!
//! Takes no arguments; the output is fully determined by the fixed cube
//! topology. Generated definitions go to stdout, one status line goes to
//! stderr, exit status 0 on success.

use cube_topology::codegen;
use std::io::{self, BufWriter, Write};

fn main() -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    codegen::write_tables(&mut out)?;
    out.flush()?;
    eprintln!("[cubegen] Wrote cube topology tables.");
    Ok(())
}
