// src/output/dot.rs

//! Graphviz output: one node per task, one edge per transfer.

use std::io::{self, Write};

use crate::dag::Dag;
use crate::output::tags::GraphTags;

/// Tag `dag` with the graph scheme and write it as a `digraph` to `out`.
///
/// Each task's node line is followed by the lines of its outgoing edges.
pub fn write_dot<W: Write + ?Sized>(dag: &Dag, out: &mut W) -> io::Result<()> {
    let tags = GraphTags::assign(dag);
    write_dot_tagged(dag, &tags, out)
}

pub fn write_dot_tagged<W: Write + ?Sized>(
    dag: &Dag,
    tags: &GraphTags,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "digraph G {{")?;

    for (id, task) in dag.tasks() {
        let tag = tags.task(id);
        writeln!(
            out,
            "  {} [size=\"{:.0}\", alpha=\"{:.2}\"]",
            tag, task.cost, task.alpha
        )?;
        for transfer in task.transfers() {
            writeln!(
                out,
                "  {} -> {} [size=\"{:.0}\"]",
                tag,
                tags.task(transfer.child),
                transfer.comm_cost
            )?;
        }
    }

    writeln!(out, "}}")
}
