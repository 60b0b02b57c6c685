// src/output/mod.rs

//! Serialization of a [`Dag`] to text.
//!
//! - [`tags`] assigns integer ids per output scheme.
//! - [`trace`] writes the flat trace format (ROOT/END plus transfer nodes).
//! - [`dot`] writes a Graphviz `digraph`.

pub mod dot;
pub mod tags;
pub mod trace;

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::dag::Dag;

pub use dot::write_dot;
pub use tags::{GraphTags, ROOT_TAG, TraceTags};
pub use trace::write_trace;

/// Write `dag` to `out` in the selected format.
///
/// Tags are recomputed on every call. Write errors are returned as-is and
/// whatever was written before the failure stays written.
pub fn write_dag<W: Write + ?Sized>(dag: &Dag, format: OutputFormat, out: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Trace => write_trace(dag, out),
        OutputFormat::Dot => write_dot(dag, out),
    }
}
